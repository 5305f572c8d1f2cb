//! State shared by every engine: derived uri, labels, host collaborators.

use crate::cache::Cache;
use crate::capability::Operation;
use crate::config::{normalize_base_uri, EngineConfig, DEFAULT_CONTENT_TYPE, DEFAULT_PROTOCOL};
use crate::error::{EngineError, EngineResult};
use crate::host::Host;
use crate::pluralize::Pluralizer;
use resourceful_model::{Document, Method};
use std::fmt;
use std::sync::Arc;

/// Construction-time state of an engine.
///
/// Immutable once built. Concrete engines embed one and expose it through
/// `Engine::base`.
#[derive(Clone)]
pub struct EngineBase {
    base_uri: String,
    protocol: String,
    content_type: String,
    child_node: Option<String>,
    cache: Arc<dyn Cache>,
    pluralizer: Arc<dyn Pluralizer>,
}

impl EngineBase {
    /// Builds engine state from `config`, obtaining a cache from `host`.
    ///
    /// Fails with [`EngineError::Configuration`] when `uri` is missing or empty.
    pub fn new(config: EngineConfig, host: &Host) -> EngineResult<Self> {
        let uri = match config.uri.as_deref() {
            Some(uri) if !uri.is_empty() => uri,
            _ => {
                return Err(EngineError::Configuration(
                    "The uri property is required".to_string(),
                ));
            }
        };

        Ok(Self {
            base_uri: normalize_base_uri(config.prefix.as_deref(), uri),
            protocol: config.protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            content_type: config
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            child_node: config.child_node,
            cache: host.cache_factory.create(),
            pluralizer: Arc::clone(&host.pluralizer),
        })
    }

    /// Prefix plus normalized uri, always ending in `/`.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn child_node(&self) -> Option<&str> {
        self.child_node.as_deref()
    }

    pub fn cache(&self) -> &Arc<dyn Cache> {
        &self.cache
    }

    pub fn pluralizer(&self) -> &Arc<dyn Pluralizer> {
        &self.pluralizer
    }

    /// Resolves the location a request addresses.
    ///
    /// `del`, `get`, `head` and `put` address `base_uri + id`. `post`
    /// addresses the pluralized, lowercased collection named by the
    /// document's `resource` field, or `base_uri` itself when it names none.
    pub fn target(&self, method: &Method, id: Option<&str>, doc: Option<&Document>) -> String {
        if method.is_addressed_by_id() {
            return format!("{}{}", self.base_uri, id.unwrap_or(""));
        }

        match method {
            Method::Post => match doc.and_then(Document::resource) {
                Some(resource) => format!(
                    "{}{}",
                    self.base_uri,
                    self.pluralizer.pluralize(&resource.to_lowercase())
                ),
                None => self.base_uri.clone(),
            },
            _ => self.base_uri.clone(),
        }
    }

    /// The uniform failure for an operation this engine does not provide.
    pub fn unsupported(&self, operation: Operation) -> EngineError {
        EngineError::unsupported(operation, &self.protocol)
    }
}

impl fmt::Debug for EngineBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineBase")
            .field("base_uri", &self.base_uri)
            .field("protocol", &self.protocol)
            .field("content_type", &self.content_type)
            .field("child_node", &self.child_node)
            .finish_non_exhaustive()
    }
}
