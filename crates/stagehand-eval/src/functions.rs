//! Function registry and method-style lookup.
//!
//! DSL functions are exposed on a scope as methods named `function_<name>`.
//! [`MethodLookup`] is that capability; [`FunctionRegistry`] answers whether
//! a function exists at all.

use crate::{template, Scope};
use stagehand_types::{FixtureError, Result, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Prefix of the method identifier a function is exposed under.
pub const FUNCTION_PREFIX: &str = "function_";

/// Signature of a native function implementation.
pub type NativeFn = dyn Fn(&Scope, &[Value]) -> Result<Value>;

/// Method identifier for a function: `function_<name>`.
pub fn method_ident(name: &str) -> String {
    format!("{FUNCTION_PREFIX}{name}")
}

/// Answers whether a function name is registered.
pub trait FunctionRegistry {
    fn is_registered(&self, name: &str) -> bool;
}

/// Identifier → method lookup on a scope-like receiver.
pub trait MethodLookup {
    type Method;

    fn method(&self, ident: &str) -> Result<Self::Method>;
}

/// Named native functions.
#[derive(Clone, Default)]
pub struct Functions {
    functions: BTreeMap<String, Rc<NativeFn>>,
}

impl Functions {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the builtin functions.
    pub fn builtin() -> Self {
        let mut functions = Self::new();
        functions.register("inline_template", inline_template);
        functions.register("fail", fail);
        functions
    }

    /// Register (or replace) a function.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&Scope, &[Value]) -> Result<Value> + 'static,
    {
        self.functions.insert(name.into(), Rc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Rc<NativeFn>> {
        self.functions.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl FunctionRegistry for Functions {
    fn is_registered(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

impl fmt::Debug for Functions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// A function bound to the scope it was looked up on.
#[derive(Clone)]
pub struct FunctionHandle {
    name: String,
    scope: Scope,
    func: Rc<NativeFn>,
}

impl FunctionHandle {
    pub(crate) fn new(name: impl Into<String>, scope: Scope, func: Rc<NativeFn>) -> Self {
        Self {
            name: name.into(),
            scope,
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        log::trace!("calling {}({} args)", self.name, args.len());
        (self.func)(&self.scope, args)
    }
}

impl fmt::Debug for FunctionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionHandle")
            .field("name", &self.name)
            .field("source", &self.scope.source().name())
            .finish()
    }
}

// ──────────────────────────────────────────────────────────────────────
// Builtins
// ──────────────────────────────────────────────────────────────────────

/// Render each argument as an inline template and concatenate the results.
fn inline_template(scope: &Scope, args: &[Value]) -> Result<Value> {
    if args.is_empty() {
        return Err(FixtureError::ArgumentCount {
            function: "inline_template".into(),
            expected: 1,
            found: 0,
        });
    }
    let mut out = String::new();
    for arg in args {
        let Value::String(source) = arg else {
            return Err(FixtureError::InvalidArgument {
                function: "inline_template".into(),
                message: format!("expected a String, got {}", arg.type_name()),
            });
        };
        out.push_str(&template::render(source, scope)?);
    }
    Ok(Value::String(out))
}

fn fail(_scope: &Scope, args: &[Value]) -> Result<Value> {
    let message = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    Err(FixtureError::Failed(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_ident() {
        assert_eq!(method_ident("my_func"), "function_my_func");
    }

    #[test]
    fn test_builtin_registry() {
        let functions = Functions::builtin();
        assert!(functions.is_registered("inline_template"));
        assert!(functions.is_registered("fail"));
        assert!(!functions.is_registered("my_func"));
        assert_eq!(format!("{functions:?}"), r#"{"fail", "inline_template"}"#);
    }

    #[test]
    fn test_register_replaces() {
        let mut functions = Functions::new();
        functions.register("answer", |_, _| Ok(Value::Integer(1)));
        functions.register("answer", |_, _| Ok(Value::Integer(42)));
        assert_eq!(functions.names().collect::<Vec<_>>(), vec!["answer"]);
    }
}
