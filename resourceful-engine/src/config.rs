//! Engine configuration.

use crate::error::EngineResult;
use serde::{Deserialize, Serialize};

/// Media type assumed when the configuration names none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Protocol label assumed when the configuration names none.
pub const DEFAULT_PROTOCOL: &str = "baseengine";

/// Configuration supplied when the host binds a resource type to an engine.
///
/// Accepts both snake_case and the host framework's camelCase keys, so
/// `{"uri": "dummy", "contentType": "text/plain"}` deserializes directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base resource location. Required.
    #[serde(default)]
    pub uri: Option<String>,
    /// Part of the returned object to select, or `None` for the root.
    #[serde(default, alias = "childNode", skip_serializing_if = "Option::is_none")]
    pub child_node: Option<String>,
    #[serde(default, alias = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Prepended verbatim to the normalized uri.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl EngineConfig {
    /// Creates a configuration for `uri` with every other field defaulted.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn child_node(mut self, child_node: impl Into<String>) -> Self {
        self.child_node = Some(child_node.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

/// Joins `prefix` and `uri`, trimming one trailing `/` from `uri` and
/// appending one. `"a"` and `"a/"` both become `"a/"`; `"a//"` stays `"a//"`.
pub fn normalize_base_uri(prefix: Option<&str>, uri: &str) -> String {
    let trimmed = uri.strip_suffix('/').unwrap_or(uri);
    format!("{}{}/", prefix.unwrap_or(""), trimmed)
}
