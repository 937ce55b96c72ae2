//! Evaluation scopes.

use crate::functions::{FunctionHandle, Functions, MethodLookup, FUNCTION_PREFIX};
use crate::Compiler;
use stagehand_types::{FixtureError, Resource, Result, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Optional parts of a [`Scope`].
#[derive(Debug, Default, Clone)]
pub struct ScopeOptions {
    /// Enclosing scope consulted when a variable is not local.
    pub parent: Option<Scope>,
    /// Variables defined in the new scope before anything runs.
    pub variables: BTreeMap<String, Value>,
    /// Function set for this scope. Defaults to the compiler's.
    pub functions: Option<Rc<Functions>>,
}

struct ScopeData {
    compiler: Rc<Compiler>,
    source: Rc<Resource>,
    parent: Option<Scope>,
    functions: Rc<Functions>,
    variables: RefCell<BTreeMap<String, Value>>,
}

/// Variable and function lookup context.
///
/// A scope is a cheap handle: clones refer to the same scope. It never owns
/// its compiler's lifetime exclusively; the compiler is shared.
#[derive(Clone)]
pub struct Scope {
    inner: Rc<ScopeData>,
}

impl Scope {
    pub fn new(compiler: Rc<Compiler>, source: Rc<Resource>) -> Self {
        Self::from_parts(compiler, source, ScopeOptions::default())
    }

    /// Create a scope with options.
    ///
    /// A parent scope must be bound to the same compiler; otherwise this is
    /// [`FixtureError::CompilerMismatch`].
    pub fn with_options(
        compiler: Rc<Compiler>,
        source: Rc<Resource>,
        options: ScopeOptions,
    ) -> Result<Self> {
        if let Some(parent) = &options.parent {
            if !Rc::ptr_eq(parent.compiler(), &compiler) {
                return Err(FixtureError::CompilerMismatch {
                    scope: compiler.node().name().to_string(),
                    parent: parent.compiler().node().name().to_string(),
                });
            }
        }
        Ok(Self::from_parts(compiler, source, options))
    }

    fn from_parts(compiler: Rc<Compiler>, source: Rc<Resource>, options: ScopeOptions) -> Self {
        let functions = options
            .functions
            .unwrap_or_else(|| Rc::clone(compiler.functions()));
        Self {
            inner: Rc::new(ScopeData {
                compiler,
                source,
                parent: options.parent,
                functions,
                variables: RefCell::new(options.variables),
            }),
        }
    }

    pub fn compiler(&self) -> &Rc<Compiler> {
        &self.inner.compiler
    }

    /// The code unit this scope evaluates within.
    pub fn source(&self) -> &Rc<Resource> {
        &self.inner.source
    }

    pub fn parent(&self) -> Option<&Scope> {
        self.inner.parent.as_ref()
    }

    pub fn functions(&self) -> &Rc<Functions> {
        &self.inner.functions
    }

    /// Whether two handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Scope) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// A nested scope sharing this scope's compiler, source and functions.
    pub fn child(&self) -> Scope {
        Self::from_parts(
            Rc::clone(self.compiler()),
            Rc::clone(self.source()),
            ScopeOptions {
                parent: Some(self.clone()),
                variables: BTreeMap::new(),
                functions: Some(Rc::clone(self.functions())),
            },
        )
    }

    /// Define a local variable. Variables cannot be reassigned in the scope
    /// that defined them.
    pub fn setvar(&self, name: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let name = name.into();
        let mut variables = self.inner.variables.borrow_mut();
        if variables.contains_key(&name) {
            return Err(FixtureError::VariableReassigned(name));
        }
        variables.insert(name, value.into());
        Ok(())
    }

    /// A variable defined in this scope only.
    pub fn local(&self, name: &str) -> Option<Value> {
        self.inner.variables.borrow().get(name).cloned()
    }

    /// Resolve a variable: locals, then the parent chain, then node facts.
    ///
    /// A leading `::` skips straight to the facts. Unknown names are `Undef`.
    pub fn lookupvar(&self, name: &str) -> Value {
        if let Some(top) = name.strip_prefix("::") {
            return self.fact(top);
        }
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(value) = scope.local(name) {
                return value;
            }
            current = scope.parent();
        }
        self.fact(name)
    }

    fn fact(&self, name: &str) -> Value {
        self.compiler()
            .node()
            .fact(name)
            .cloned()
            .unwrap_or_default()
    }

    /// Call a function by DSL name.
    pub fn call_function(&self, name: &str, args: &[Value]) -> Result<Value> {
        let func = self
            .functions()
            .get(name)
            .ok_or_else(|| FixtureError::UnknownFunction(name.to_string()))?;
        FunctionHandle::new(name, self.clone(), func).call(args)
    }
}

impl MethodLookup for Scope {
    type Method = FunctionHandle;

    fn method(&self, ident: &str) -> Result<FunctionHandle> {
        let func = ident
            .strip_prefix(FUNCTION_PREFIX)
            .and_then(|name| self.functions().get(name).map(|f| (name, f)));
        match func {
            Some((name, f)) => Ok(FunctionHandle::new(name, self.clone(), f)),
            None => Err(FixtureError::MethodNotFound(ident.to_string())),
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("node", &self.compiler().node().name())
            .field("source", &self.source().to_string())
            .field("variables", &self.inner.variables.borrow())
            .field("has_parent", &self.parent().is_some())
            .finish()
    }
}
