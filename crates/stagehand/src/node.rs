//! Node construction.

use stagehand_types::{
    Environment, EnvironmentLoader, Node, NodeOptions, Result, Value, DEFAULT_ENVIRONMENT,
    DEFAULT_NODE_NAME,
};
use std::collections::BTreeMap;
use std::rc::Rc;

/// How the caller asked for a node's environment.
#[derive(Debug, Clone, Default)]
pub enum EnvironmentArg {
    /// Use the default environment.
    #[default]
    Default,
    /// Resolve an environment by name.
    Named(String),
    /// Use this environment as-is.
    Built(Rc<Environment>),
}

impl From<&str> for EnvironmentArg {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for EnvironmentArg {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Rc<Environment>> for EnvironmentArg {
    fn from(env: Rc<Environment>) -> Self {
        Self::Built(env)
    }
}

/// Builds a [`Node`].
///
/// Defaults: name `testinghost`, environment `production`, no facts.
#[derive(Debug, Clone, Default)]
pub struct NodeBuilder {
    name: Option<String>,
    environment: EnvironmentArg,
    options: NodeOptions,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn environment(mut self, environment: impl Into<EnvironmentArg>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Replace the construction options wholesale.
    pub fn options(mut self, options: NodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the fact set.
    pub fn parameters(mut self, parameters: BTreeMap<String, Value>) -> Self {
        self.options.parameters = parameters;
        self
    }

    /// Add a single fact.
    pub fn fact(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.parameters.insert(name.into(), value.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.options.classes.push(class.into());
        self
    }

    /// Build the node. A named environment is created on the spot.
    pub fn build(self) -> Rc<Node> {
        let environment = match self.environment {
            EnvironmentArg::Default => Environment::create(DEFAULT_ENVIRONMENT, Vec::new()),
            EnvironmentArg::Named(name) => Environment::create(name, Vec::new()),
            EnvironmentArg::Built(env) => env,
        };
        Self::finish(self.name, environment, self.options)
    }

    /// Build the node, resolving a named or default environment through
    /// `loader`. Loader errors are returned as-is.
    pub fn try_build_with<L>(self, loader: &L) -> Result<Rc<Node>>
    where
        L: EnvironmentLoader + ?Sized,
    {
        let environment = match self.environment {
            EnvironmentArg::Default => loader.get(DEFAULT_ENVIRONMENT)?,
            EnvironmentArg::Named(name) => loader.get(&name)?,
            EnvironmentArg::Built(env) => env,
        };
        Ok(Self::finish(self.name, environment, self.options))
    }

    fn finish(name: Option<String>, environment: Rc<Environment>, options: NodeOptions) -> Rc<Node> {
        let name = name.unwrap_or_else(|| DEFAULT_NODE_NAME.to_string());
        log::debug!(
            "building node {name} in environment {} with {} fact(s)",
            environment.name(),
            options.parameters.len()
        );
        Rc::new(Node::new(name, environment, options))
    }
}
