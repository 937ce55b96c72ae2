//! Resource construction.

use stagehand_types::{Resource, ResourceKind, ResourceOptions, Value, DEFAULT_RESOURCE_NAME};

/// Builds a [`Resource`].
///
/// Kind defaults to [`ResourceKind::Hostclass`] and name to `testing`; each
/// default applies on its own.
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    kind: Option<ResourceKind>,
    name: Option<String>,
    options: ResourceOptions,
}

impl ResourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: ResourceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn options(mut self, options: ResourceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.parameters.insert(name.into(), value.into());
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.options.parent = Some(parent.into());
        self
    }

    pub fn build(self) -> Resource {
        Resource::new(
            self.kind.unwrap_or_default(),
            self.name.unwrap_or_else(|| DEFAULT_RESOURCE_NAME.to_string()),
            self.options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_and_parent() {
        let r = ResourceBuilder::new()
            .name("apache::vhost")
            .parameter("port", 80_i64)
            .parent("apache")
            .build();
        assert_eq!(r.kind(), ResourceKind::Hostclass);
        assert_eq!(r.parameter("port"), Some(&Value::Integer(80)));
        assert_eq!(r.parent(), Some("apache"));
    }
}
