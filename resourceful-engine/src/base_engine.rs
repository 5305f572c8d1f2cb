use crate::base::EngineBase;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::EngineResult;
use crate::host::Host;
use crate::registry::EngineFactory;
use async_trait::async_trait;
use std::sync::Arc;

/// Name the base contract registers under.
pub const BASE_ENGINE_NAME: &str = "BaseEngine";

/// The engine contract with nothing overridden.
///
/// Every request fails with the default "No ... method." errors. Useful as
/// a placeholder binding and as the reference for what a concrete engine
/// must replace.
#[derive(Debug, Clone)]
pub struct BaseEngine {
    base: EngineBase,
}

impl BaseEngine {
    pub fn new(config: EngineConfig, host: &Host) -> EngineResult<Self> {
        Ok(Self {
            base: EngineBase::new(config, host)?,
        })
    }

    /// Factory suitable for [`crate::EngineRegistry::register`].
    pub fn factory() -> EngineFactory {
        Arc::new(|config: EngineConfig, host: &Host| {
            Ok(Arc::new(BaseEngine::new(config, host)?) as Arc<dyn Engine>)
        })
    }
}

#[async_trait]
impl Engine for BaseEngine {
    fn base(&self) -> &EngineBase {
        &self.base
    }
}
