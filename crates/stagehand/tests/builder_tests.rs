//! Integration tests for the stagehand builders.
//!
//! Tests cover:
//! - scope defaults and compiler identity
//! - resource defaults and independent overrides
//! - compiler / node identity
//! - node name, environment and facts
//! - function resolution through injected registries and scopes

use stagehand::{
    compiler, function_method, node, resolve_function, resource, scope, CompilerBuilder,
    FixtureError, FunctionRegistry, MethodLookup, NodeBuilder, NodeOptions, ResourceBuilder,
    ResourceKind, Result, ScopeBuilder, Value,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

// ══════════════════════════════════════════════════════════════════════════════
// Test doubles
// ══════════════════════════════════════════════════════════════════════════════

/// Registry that answers a fixed yes/no and records what it was asked.
struct StubRegistry {
    registered: bool,
    queries: RefCell<Vec<String>>,
}

impl StubRegistry {
    fn new(registered: bool) -> Self {
        Self {
            registered,
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl FunctionRegistry for StubRegistry {
    fn is_registered(&self, name: &str) -> bool {
        self.queries.borrow_mut().push(name.to_string());
        self.registered
    }
}

/// Scope stand-in that only knows `function_my_func`.
#[derive(Default)]
struct StubScope {
    lookups: RefCell<Vec<String>>,
}

impl MethodLookup for StubScope {
    type Method = &'static str;

    fn method(&self, ident: &str) -> Result<&'static str> {
        self.lookups.borrow_mut().push(ident.to_string());
        match ident {
            "function_my_func" => Ok("fake_method"),
            other => Err(FixtureError::MethodNotFound(other.to_string())),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Scope
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn scope_is_suitable_for_function_testing() {
    let out = scope()
        .call_function("inline_template", &[Value::from("foo")])
        .unwrap();
    assert_eq!(out, Value::from("foo"));
}

#[test]
fn scope_accepts_a_compiler() {
    let compiler = compiler();
    let scope = ScopeBuilder::new().compiler(Rc::clone(&compiler)).build();
    assert!(Rc::ptr_eq(scope.compiler(), &compiler));
}

#[test]
fn scope_has_a_source_set() {
    let scope = scope();
    assert_eq!(scope.source().name(), "foo");
}

#[test]
fn default_scopes_are_isolated() {
    let a = scope();
    let b = scope();
    assert!(!Rc::ptr_eq(a.compiler(), b.compiler()));
    assert!(!Rc::ptr_eq(a.compiler().node(), b.compiler().node()));
    a.setvar("x", 1_i64).unwrap();
    assert_eq!(b.lookupvar("x"), Value::Undef);
}

#[test]
fn many_scopes_on_one_compiler() {
    let compiler = compiler();
    let scopes: Vec<_> = (0..3)
        .map(|_| ScopeBuilder::new().compiler(Rc::clone(&compiler)).build())
        .collect();
    assert!(scopes.iter().all(|s| Rc::ptr_eq(s.compiler(), &compiler)));
}

#[test]
fn scope_with_parent_joins_parent_compiler() {
    let node = NodeBuilder::new().fact("role", "db").build();
    let outer = ScopeBuilder::new()
        .compiler(CompilerBuilder::new().node(node).build())
        .build();
    let inner = ScopeBuilder::new().parent(outer.clone()).build();
    assert!(Rc::ptr_eq(inner.compiler(), outer.compiler()));
    assert_eq!(inner.lookupvar("::role"), Value::from("db"));
    assert_eq!(inner.lookupvar("role"), Value::from("db"));
}

#[test]
fn scope_rejects_parent_on_another_compiler() {
    let outer = scope();
    let err = ScopeBuilder::new()
        .compiler(compiler())
        .parent(outer)
        .try_build()
        .unwrap_err();
    assert!(matches!(err, FixtureError::CompilerMismatch { .. }));
}

#[test]
#[should_panic(expected = "parent scope belongs to compiler")]
fn scope_build_panics_on_compiler_mismatch() {
    ScopeBuilder::new().compiler(compiler()).parent(scope()).build();
}

// ══════════════════════════════════════════════════════════════════════════════
// Resource
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn resource_can_have_a_defined_type() {
    let r = ResourceBuilder::new().kind(ResourceKind::Node).build();
    assert_eq!(r.kind(), ResourceKind::Node);
    assert_eq!(r.name(), "testing");
}

#[test]
fn resource_defaults_to_hostclass() {
    assert_eq!(resource().kind(), ResourceKind::Hostclass);
}

#[test]
fn resource_can_have_a_defined_name() {
    let r = ResourceBuilder::new().name("testingrsrc").build();
    assert_eq!(r.name(), "testingrsrc");
    assert_eq!(r.kind(), ResourceKind::Hostclass);
}

#[test]
fn resource_defaults_to_name_testing() {
    assert_eq!(resource().name(), "testing");
}

// ══════════════════════════════════════════════════════════════════════════════
// Compiler
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn compiler_can_have_a_defined_node() {
    let node = node();
    let compiler = CompilerBuilder::new().node(Rc::clone(&node)).build();
    assert!(Rc::ptr_eq(compiler.node(), &node));
}

#[test]
fn scope_through_supplied_node() {
    let node = NodeBuilder::new().name("web01").build();
    let compiler = CompilerBuilder::new().node(Rc::clone(&node)).build();
    let scope = ScopeBuilder::new().compiler(compiler).build();
    assert!(Rc::ptr_eq(scope.compiler().node(), &node));
}

// ══════════════════════════════════════════════════════════════════════════════
// Node
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn node_can_have_a_defined_name() {
    assert_eq!(NodeBuilder::new().name("mine").build().name(), "mine");
}

#[test]
fn node_can_have_a_defined_environment() {
    let node = NodeBuilder::new().environment("mine").build();
    assert_eq!(node.environment().name(), "mine");
}

#[test]
fn node_defaults_to_testinghost() {
    assert_eq!(node().name(), "testinghost");
    assert_eq!(node().environment().name(), "production");
}

#[test]
fn node_accepts_facts_via_options() {
    let mut facts = BTreeMap::new();
    facts.insert("fqdn".to_string(), Value::from("jeff.example.com"));
    let node = NodeBuilder::new()
        .options(NodeOptions::with_parameters(facts.clone()))
        .build();
    assert_eq!(node.parameters(), &facts);
}

#[test]
fn node_passes_unknown_options_through() {
    let mut options = NodeOptions::default();
    options
        .extra
        .insert("certname".to_string(), Value::from("web01.example.com"));
    let node = NodeBuilder::new().options(options).build();
    assert_eq!(node.option("certname"), Some(&Value::from("web01.example.com")));
    assert!(node.parameters().is_empty());
}

// ══════════════════════════════════════════════════════════════════════════════
// Function resolution
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn resolver_accepts_an_injected_scope() {
    let registry = StubRegistry::new(true);
    let scope = StubScope::default();
    let method = resolve_function(&registry, "my_func", &scope).unwrap();
    assert_eq!(method, Some("fake_method"));
    assert_eq!(*registry.queries.borrow(), vec!["my_func".to_string()]);
    assert_eq!(*scope.lookups.borrow(), vec!["function_my_func".to_string()]);
}

#[test]
fn resolver_returns_none_for_unregistered_function() {
    let registry = StubRegistry::new(false);
    let scope = StubScope::default();
    let method = resolve_function(&registry, "my_func", &scope).unwrap();
    assert_eq!(method, None);
    assert!(scope.lookups.borrow().is_empty());
}

#[test]
fn resolver_propagates_lookup_failure() {
    let registry = StubRegistry::new(true);
    let err = resolve_function(&registry, "other", &StubScope::default()).unwrap_err();
    assert!(matches!(err, FixtureError::MethodNotFound(ref i) if i == "function_other"));
}

#[test]
fn function_method_on_real_scope() {
    let scope = ScopeBuilder::new().variable("name", "world").build();
    let handle = function_method("inline_template", Some(&scope))
        .unwrap()
        .expect("inline_template is a builtin");
    assert!(handle.scope().ptr_eq(&scope));
    assert_eq!(
        handle.call(&[Value::from("hello <%= @name %>")]).unwrap(),
        Value::from("hello world")
    );
    assert!(function_method("my_func", Some(&scope)).unwrap().is_none());
}

#[test]
fn function_method_builds_default_scope() {
    let handle = function_method("inline_template", None).unwrap().unwrap();
    assert_eq!(handle.scope().source().name(), "foo");
    assert_eq!(handle.call(&[Value::from("foo")]).unwrap(), Value::from("foo"));
}
