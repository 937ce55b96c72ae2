//! Target-machine descriptors.

use crate::{Environment, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Node name used when a test does not pick one.
pub const DEFAULT_NODE_NAME: &str = "testinghost";

/// Construction options for a [`Node`].
///
/// `parameters` and `classes` are understood here. Every other key is kept
/// in `extra` and handed to the node untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeOptions {
    /// Facts and other node parameters, stored verbatim.
    pub parameters: BTreeMap<String, Value>,
    /// Classes the node is classified with.
    pub classes: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl NodeOptions {
    pub fn with_parameters(parameters: BTreeMap<String, Value>) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }
}

/// The machine a catalog is being compiled for.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    environment: Rc<Environment>,
    parameters: BTreeMap<String, Value>,
    classes: Vec<String>,
    options: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(name: impl Into<String>, environment: Rc<Environment>, options: NodeOptions) -> Self {
        Self {
            name: name.into(),
            environment,
            parameters: options.parameters,
            classes: options.classes,
            options: options.extra,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment(&self) -> &Rc<Environment> {
        &self.environment
    }

    /// The fact set exactly as it was supplied.
    pub fn parameters(&self) -> &BTreeMap<String, Value> {
        &self.parameters
    }

    pub fn fact(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// An unrecognized construction option, as passed in.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}
