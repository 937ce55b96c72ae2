//! Function lookup by DSL name.

use crate::ScopeBuilder;
use stagehand_eval::{method_ident, FunctionHandle, FunctionRegistry, MethodLookup, Scope};
use stagehand_types::Result;

/// Resolve `name` to the scope's `function_<name>` method.
///
/// Returns `Ok(None)` when the registry does not know the function. When it
/// does, the scope's lookup result is returned unchanged, error included.
pub fn resolve_function<R, S>(registry: &R, name: &str, scope: &S) -> Result<Option<S::Method>>
where
    R: FunctionRegistry + ?Sized,
    S: MethodLookup + ?Sized,
{
    if !registry.is_registered(name) {
        log::debug!("function {name} is not registered");
        return Ok(None);
    }
    let ident = method_ident(name);
    log::trace!("resolving {ident}");
    scope.method(&ident).map(Some)
}

/// Resolve a function against a scope's own registry.
///
/// Without a scope, a default one is built and the handle is bound to it.
pub fn function_method(name: &str, scope: Option<&Scope>) -> Result<Option<FunctionHandle>> {
    let scope = match scope {
        Some(scope) => scope.clone(),
        None => ScopeBuilder::new().build(),
    };
    resolve_function(scope.functions().as_ref(), name, &scope)
}
