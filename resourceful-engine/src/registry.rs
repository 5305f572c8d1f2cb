//! Engine registry: maps engine names to constructors.
//!
//! The host framework owns one registry, populates it at initialization
//! and resolves from it whenever a resource type binds to an engine.

use crate::base_engine::{BaseEngine, BASE_ENGINE_NAME};
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};
use crate::host::Host;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Constructs an engine from its configuration and the host's collaborators.
pub type EngineFactory =
    Arc<dyn Fn(EngineConfig, &Host) -> EngineResult<Arc<dyn Engine>> + Send + Sync>;

#[derive(Default, Clone)]
pub struct EngineRegistry {
    factories: BTreeMap<String, EngineFactory>,
}

impl EngineRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `name` to `factory`, replacing any earlier registration.
    pub fn register(&mut self, name: impl Into<String>, factory: EngineFactory) {
        let name = name.into();
        if self.factories.insert(name.clone(), factory).is_some() {
            info!(engine = %name, "Engine registration replaced");
        } else {
            info!(engine = %name, "Engine registered");
        }
    }

    pub fn resolve(&self, name: &str) -> EngineResult<EngineFactory> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownEngine(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Resolves `name` and constructs an engine with `config`.
    pub fn create(
        &self,
        name: &str,
        config: EngineConfig,
        host: &Host,
    ) -> EngineResult<Arc<dyn Engine>> {
        let factory = self.resolve(name)?;
        let engine = factory(config, host)?;
        debug!(engine = %name, base_uri = %engine.base().base_uri(), "Engine constructed");
        Ok(engine)
    }
}

impl fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("engines", &self.names())
            .finish()
    }
}

/// Registers the base contract as `"BaseEngine"`.
pub fn init(registry: &mut EngineRegistry) {
    registry.register(BASE_ENGINE_NAME, BaseEngine::factory());
}
