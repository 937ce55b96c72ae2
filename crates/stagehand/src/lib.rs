//! stagehand: minimal object graphs for unit-testing DSL functions.
//!
//! Every builder fills in deterministic defaults for whatever the test
//! leaves out, and accepts an already-built upstream entity when the test
//! wants to share one:
//!
//! ```text
//! NodeBuilder → CompilerBuilder → ScopeBuilder
//! ResourceBuilder (independent)
//! resolve_function(name, scope) → function_<name> handle, or None
//! ```
//!
//! ```
//! use stagehand::{scope, Value};
//!
//! let scope = scope();
//! assert_eq!(scope.source().name(), "foo");
//! let out = scope.call_function("inline_template", &[Value::from("foo")]).unwrap();
//! assert_eq!(out, Value::from("foo"));
//! ```

mod compiler;
mod config;
mod facts;
mod node;
mod resolver;
mod resource;
mod scope;

pub use compiler::CompilerBuilder;
pub use config::{from_json, NodeConfig, ResourceConfig, ScopeConfig};
pub use facts::{facts_from_json, load_facts};
pub use node::{EnvironmentArg, NodeBuilder};
pub use resolver::{function_method, resolve_function};
pub use resource::ResourceBuilder;
pub use scope::{ScopeBuilder, DEFAULT_SOURCE_NAME};

pub use stagehand_eval::{
    Catalog, Compiler, FunctionHandle, FunctionRegistry, Functions, MethodLookup, Scope,
    ScopeOptions,
};
pub use stagehand_types::{
    Environment, EnvironmentLoader, Environments, FixtureError, Node, NodeOptions, Resource,
    ResourceKind, ResourceOptions, Result, Value,
};

use std::rc::Rc;

/// A node with every attribute defaulted.
pub fn node() -> Rc<Node> {
    NodeBuilder::new().build()
}

/// A compiler for a default node.
pub fn compiler() -> Rc<Compiler> {
    CompilerBuilder::new().build()
}

/// A function-test-ready scope on a fresh default compiler.
pub fn scope() -> Scope {
    ScopeBuilder::new().build()
}

/// A `hostclass` resource named `testing`.
pub fn resource() -> Resource {
    ResourceBuilder::new().build()
}
