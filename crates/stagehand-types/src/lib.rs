//! Shared types for stagehand.
//!
//! This crate defines the data a DSL function sees at evaluation time:
//! values, environments, target nodes and declared resources, plus the
//! error type shared by every stagehand crate.

mod environment;
mod error;
mod node;
mod resource;
mod value;

pub use environment::{Environment, EnvironmentLoader, Environments, DEFAULT_ENVIRONMENT};
pub use error::FixtureError;
pub use node::{Node, NodeOptions, DEFAULT_NODE_NAME};
pub use resource::{Resource, ResourceKind, ResourceOptions, DEFAULT_RESOURCE_NAME};
pub use value::Value;

/// Result type used throughout stagehand.
pub type Result<T> = std::result::Result<T, FixtureError>;
