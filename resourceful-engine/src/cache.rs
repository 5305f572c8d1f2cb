//! Cache collaborator supplied by the host framework.
//!
//! Each engine obtains one cache at construction. The base contract never
//! reads or writes it; concrete engines and the host may.

use resourceful_model::Document;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// A per-engine document cache keyed by record id.
pub trait Cache: Send + Sync + fmt::Debug {
    fn get(&self, id: &str) -> Option<Document>;
    fn put(&self, id: &str, doc: Document);
    fn remove(&self, id: &str) -> Option<Document>;
    fn clear(&self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Produces a fresh cache for each engine instance.
pub trait CacheFactory: Send + Sync {
    fn create(&self) -> Arc<dyn Cache>;
}

/// In-process cache backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Document>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

// Poisoned guards are recovered: every write leaves the map consistent.
impl Cache for MemoryCache {
    fn get(&self, id: &str) -> Option<Document> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(id).cloned()
    }

    fn put(&self, id: &str, doc: Document) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(id.to_string(), doc);
    }

    fn remove(&self, id: &str) -> Option<Document> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(id)
    }

    fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }
}

/// Hands out a new, empty [`MemoryCache`] per engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryCacheFactory;

impl CacheFactory for MemoryCacheFactory {
    fn create(&self) -> Arc<dyn Cache> {
        Arc::new(MemoryCache::new())
    }
}
