//! Evaluation context for DSL function tests.
//!
//! ```text
//! Node → Compiler → Scope → function_<name> → FunctionHandle
//! ```
//!
//! A [`Compiler`] owns the node being compiled and the catalog collected so
//! far. A [`Scope`] is bound to one compiler and one source unit and is the
//! receiver every DSL function is called on.

mod compiler;
mod functions;
mod scope;
pub mod template;

pub use compiler::{Catalog, Compiler};
pub use functions::{
    method_ident, FunctionHandle, FunctionRegistry, Functions, MethodLookup, NativeFn,
    FUNCTION_PREFIX,
};
pub use scope::{Scope, ScopeOptions};
