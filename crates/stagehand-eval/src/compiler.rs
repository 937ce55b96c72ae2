//! Per-test compilation state.

use crate::Functions;
use std::cell::RefCell;
use std::rc::Rc;
use stagehand_types::{Environment, Node, Resource, ResourceKind};

/// Resources declared while a test runs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    resources: Vec<Resource>,
}

impl Catalog {
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn find(&self, kind: ResourceKind, name: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|r| r.kind() == kind && r.name() == name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Compilation context for one node.
///
/// The node is shared, never copied: `compiler.node()` is the very `Rc` the
/// compiler was created with.
#[derive(Debug)]
pub struct Compiler {
    node: Rc<Node>,
    functions: Rc<Functions>,
    catalog: RefCell<Catalog>,
}

impl Compiler {
    /// Create a compiler with the builtin function set.
    pub fn new(node: Rc<Node>) -> Rc<Self> {
        Self::with_functions(node, Rc::new(Functions::builtin()))
    }

    pub fn with_functions(node: Rc<Node>, functions: Rc<Functions>) -> Rc<Self> {
        Rc::new(Self {
            node,
            functions,
            catalog: RefCell::new(Catalog::default()),
        })
    }

    pub fn node(&self) -> &Rc<Node> {
        &self.node
    }

    pub fn environment(&self) -> &Rc<Environment> {
        self.node.environment()
    }

    /// Functions visible to scopes created against this compiler.
    pub fn functions(&self) -> &Rc<Functions> {
        &self.functions
    }

    /// A snapshot of the catalog. Later `add_resource` calls do not show up
    /// in it, and holding it never blocks them.
    pub fn catalog(&self) -> Catalog {
        self.catalog.borrow().clone()
    }

    pub fn add_resource(&self, resource: Resource) {
        log::trace!("catalog for {}: adding {}", self.node.name(), resource);
        self.catalog.borrow_mut().resources.push(resource);
    }
}
