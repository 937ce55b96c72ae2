//! Scope construction.

use crate::CompilerBuilder;
use stagehand_eval::{Compiler, Functions, Scope, ScopeOptions};
use stagehand_types::{Resource, ResourceKind, ResourceOptions, Result, Value};
use std::rc::Rc;

/// Name of the synthetic class a default scope evaluates within.
pub const DEFAULT_SOURCE_NAME: &str = "foo";

/// Builds a [`Scope`].
///
/// With nothing set, the scope gets a fresh compiler (and node) and a
/// hostclass source named `foo`, and can call the builtin functions. A
/// scope given only a parent shares the parent's compiler.
#[derive(Debug, Clone, Default)]
pub struct ScopeBuilder {
    compiler: Option<Rc<Compiler>>,
    source: Option<Rc<Resource>>,
    options: ScopeOptions,
}

impl ScopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the scope to this compiler. `scope.compiler()` will be this `Rc`.
    pub fn compiler(mut self, compiler: Rc<Compiler>) -> Self {
        self.compiler = Some(compiler);
        self
    }

    pub fn source(mut self, source: Resource) -> Self {
        self.source = Some(Rc::new(source));
        self
    }

    pub fn options(mut self, options: ScopeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn parent(mut self, parent: Scope) -> Self {
        self.options.parent = Some(parent);
        self
    }

    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.variables.insert(name.into(), value.into());
        self
    }

    pub fn functions(mut self, functions: Rc<Functions>) -> Self {
        self.options.functions = Some(functions);
        self
    }

    /// Build the scope.
    ///
    /// # Panics
    ///
    /// Panics when the parent scope belongs to a different compiler than the
    /// one given. Use [`ScopeBuilder::try_build`] to get the error instead.
    pub fn build(self) -> Scope {
        match self.try_build() {
            Ok(scope) => scope,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build the scope, rejecting a parent bound to another compiler.
    ///
    /// Without an explicit compiler the scope joins its parent's compiler,
    /// or a fresh default one when there is no parent.
    pub fn try_build(self) -> Result<Scope> {
        let compiler = match (self.compiler, &self.options.parent) {
            (Some(compiler), _) => compiler,
            (None, Some(parent)) => Rc::clone(parent.compiler()),
            (None, None) => {
                log::debug!("no compiler given, building a default one");
                CompilerBuilder::new().build()
            }
        };
        let source = self.source.unwrap_or_else(default_source);
        log::trace!(
            "building scope for {} on node {}",
            source,
            compiler.node().name()
        );
        Scope::with_options(compiler, source, self.options)
    }
}

fn default_source() -> Rc<Resource> {
    Rc::new(Resource::new(
        ResourceKind::Hostclass,
        DEFAULT_SOURCE_NAME,
        ResourceOptions::default(),
    ))
}
