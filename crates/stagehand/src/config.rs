//! Serde forms of the builder inputs, for fixtures kept as JSON.

use crate::{CompilerBuilder, NodeBuilder, ResourceBuilder, ScopeBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stagehand_types::{NodeOptions, ResourceKind, ResourceOptions, Result, Value};
use std::collections::BTreeMap;

/// Parse any config from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    pub name: Option<String>,
    pub environment: Option<String>,
    pub options: NodeOptions,
}

impl From<NodeConfig> for NodeBuilder {
    fn from(config: NodeConfig) -> Self {
        let mut builder = NodeBuilder::new().options(config.options);
        if let Some(name) = config.name {
            builder = builder.name(name);
        }
        if let Some(environment) = config.environment {
            builder = builder.environment(environment);
        }
        builder
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    #[serde(rename = "type")]
    pub kind: Option<ResourceKind>,
    pub name: Option<String>,
    pub options: ResourceOptions,
}

impl From<ResourceConfig> for ResourceBuilder {
    fn from(config: ResourceConfig) -> Self {
        let mut builder = ResourceBuilder::new().options(config.options);
        if let Some(kind) = config.kind {
            builder = builder.kind(kind);
        }
        if let Some(name) = config.name {
            builder = builder.name(name);
        }
        builder
    }
}

/// A whole scope fixture: node, source and seeded variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    pub node: NodeConfig,
    pub source: Option<ResourceConfig>,
    pub variables: BTreeMap<String, Value>,
}

impl From<ScopeConfig> for ScopeBuilder {
    fn from(config: ScopeConfig) -> Self {
        let node = NodeBuilder::from(config.node).build();
        let mut builder = ScopeBuilder::new().compiler(CompilerBuilder::new().node(node).build());
        if let Some(source) = config.source {
            builder = builder.source(ResourceBuilder::from(source).build());
        }
        for (name, value) in config.variables {
            builder = builder.variable(name, value);
        }
        builder
    }
}
