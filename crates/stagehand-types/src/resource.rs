//! Declared resources and the code units a scope evaluates within.

use crate::{FixtureError, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Resource name used when a test does not pick one.
pub const DEFAULT_RESOURCE_NAME: &str = "testing";

/// Kind of a declared resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A class.
    #[default]
    Hostclass,
    /// A defined type.
    Definition,
    /// A node definition.
    Node,
    /// An application definition.
    Application,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hostclass => "hostclass",
            Self::Definition => "definition",
            Self::Node => "node",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hostclass" | "class" => Ok(Self::Hostclass),
            "definition" | "define" => Ok(Self::Definition),
            "node" => Ok(Self::Node),
            "application" => Ok(Self::Application),
            other => Err(FixtureError::UnknownResourceKind(other.to_string())),
        }
    }
}

/// Optional parts of a [`Resource`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceOptions {
    pub parameters: BTreeMap<String, Value>,
    /// Name of the class this one inherits from.
    pub parent: Option<String>,
}

/// A declared resource type: a class, defined type or node definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    kind: ResourceKind,
    name: String,
    parameters: BTreeMap<String, Value>,
    parent: Option<String>,
}

impl Resource {
    pub fn new(kind: ResourceKind, name: impl Into<String>, options: ResourceOptions) -> Self {
        Self {
            kind,
            name: name.into(),
            parameters: options.parameters,
            parent: options.parent,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &BTreeMap<String, Value> {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_default_is_hostclass() {
        assert_eq!(ResourceKind::default(), ResourceKind::Hostclass);
    }

    #[test]
    fn test_kind_parse_aliases() {
        assert_eq!("class".parse::<ResourceKind>().unwrap(), ResourceKind::Hostclass);
        assert_eq!("define".parse::<ResourceKind>().unwrap(), ResourceKind::Definition);
        assert_eq!("node".parse::<ResourceKind>().unwrap(), ResourceKind::Node);
        assert!(matches!(
            "file".parse::<ResourceKind>(),
            Err(FixtureError::UnknownResourceKind(ref k)) if k == "file"
        ));
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let kind: ResourceKind = serde_json::from_str(r#""definition""#).unwrap();
        assert_eq!(kind, ResourceKind::Definition);
        assert_eq!(serde_json::to_string(&ResourceKind::Node).unwrap(), r#""node""#);
    }

    #[test]
    fn test_resource_display() {
        let r = Resource::new(ResourceKind::Hostclass, "foo", ResourceOptions::default());
        assert_eq!(r.to_string(), "hostclass 'foo'");
        assert_eq!(r.parent(), None);
    }
}
