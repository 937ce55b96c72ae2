//! Compiler construction.

use crate::NodeBuilder;
use stagehand_eval::{Compiler, Functions};
use stagehand_types::Node;
use std::rc::Rc;

/// Builds a [`Compiler`], creating a default node when none is given.
#[derive(Debug, Clone, Default)]
pub struct CompilerBuilder {
    node: Option<Rc<Node>>,
    functions: Option<Rc<Functions>>,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile for this node. The compiler keeps this exact `Rc`.
    pub fn node(mut self, node: Rc<Node>) -> Self {
        self.node = Some(node);
        self
    }

    /// Use this function set instead of the builtins.
    pub fn functions(mut self, functions: Rc<Functions>) -> Self {
        self.functions = Some(functions);
        self
    }

    pub fn build(self) -> Rc<Compiler> {
        let node = self.node.unwrap_or_else(|| {
            log::debug!("no node given, building a default one");
            NodeBuilder::new().build()
        });
        match self.functions {
            Some(functions) => Compiler::with_functions(node, functions),
            None => Compiler::new(node),
        }
    }
}
