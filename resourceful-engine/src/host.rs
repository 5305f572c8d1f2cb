//! Collaborators the host framework lends to every engine it constructs.

use crate::cache::{CacheFactory, MemoryCacheFactory};
use crate::pluralize::{EnglishPluralizer, Pluralizer};
use std::sync::Arc;

/// Host-side services an engine depends on at construction.
#[derive(Clone)]
pub struct Host {
    pub cache_factory: Arc<dyn CacheFactory>,
    pub pluralizer: Arc<dyn Pluralizer>,
}

impl Host {
    pub fn new(cache_factory: Arc<dyn CacheFactory>, pluralizer: Arc<dyn Pluralizer>) -> Self {
        Self {
            cache_factory,
            pluralizer,
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(Arc::new(MemoryCacheFactory), Arc::new(EnglishPluralizer))
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
