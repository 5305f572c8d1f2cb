//! A resource type bound to an engine.
//!
//! This is the host-side view of an engine: every call is checked against
//! the engine's [`Capabilities`](crate::Capabilities) before it is
//! dispatched, and documents created through the binding are tagged with
//! the resource name so the engine can derive their collection path.

use crate::capability::Operation;
use crate::config::EngineConfig;
use crate::engine::{Engine, UpdateOutcome};
use crate::error::EngineResult;
use crate::host::Host;
use crate::registry::EngineRegistry;
use resourceful_model::{Document, Method, RESOURCE_FIELD};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct ResourceBinding {
    name: String,
    engine: Arc<dyn Engine>,
}

impl ResourceBinding {
    pub fn new(name: impl Into<String>, engine: Arc<dyn Engine>) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }

    /// Constructs the engine registered as `engine_name` and binds it to
    /// the resource type `name`.
    pub fn bind(
        registry: &EngineRegistry,
        host: &Host,
        name: impl Into<String>,
        engine_name: &str,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        let engine = registry.create(engine_name, config, host)?;
        Ok(Self::new(name, engine))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    fn ensure(&self, op: Operation) -> EngineResult<()> {
        self.engine
            .capabilities()
            .ensure(op, self.engine.protocol())
    }

    fn tag(&self, mut doc: Document) -> Document {
        if !doc.contains_key(RESOURCE_FIELD) {
            doc.insert(RESOURCE_FIELD, self.name.clone());
        }
        doc
    }

    pub async fn request(
        &self,
        method: Method,
        id: Option<&str>,
        doc: Option<&Document>,
    ) -> EngineResult<Document> {
        self.ensure(Operation::Request)?;
        self.engine.request(method, id, doc).await
    }

    pub async fn get(&self, id: &str) -> EngineResult<Document> {
        self.ensure(Operation::Get)?;
        self.engine.get(id).await
    }

    pub async fn head(&self, id: &str) -> EngineResult<Document> {
        self.ensure(Operation::Head)?;
        self.engine.head(id).await
    }

    pub async fn put(&self, id: &str, doc: Document) -> EngineResult<Document> {
        self.ensure(Operation::Put)?;
        self.engine.put(id, doc).await
    }

    pub async fn post(&self, doc: Document) -> EngineResult<Document> {
        self.ensure(Operation::Post)?;
        self.engine.post(self.tag(doc)).await
    }

    pub async fn create(&self, doc: Document) -> EngineResult<Document> {
        self.ensure(Operation::Create)?;
        self.engine.create(self.tag(doc)).await
    }

    pub async fn save(&self, id: Option<&str>, doc: Document) -> EngineResult<Document> {
        self.ensure(Operation::Save)?;
        let doc = if id.is_none() { self.tag(doc) } else { doc };
        self.engine.save(id, doc).await
    }

    pub async fn update(&self, id: &str, doc: Document) -> EngineResult<UpdateOutcome> {
        self.ensure(Operation::Update)?;
        self.engine.update(id, doc).await
    }

    pub async fn destroy(&self, id: &str) -> EngineResult<Document> {
        self.ensure(Operation::Destroy)?;
        self.engine.destroy(id).await
    }

    pub async fn load(&self, docs: Vec<Document>) -> EngineResult<Vec<Document>> {
        self.ensure(Operation::Load)?;
        self.engine.load(docs).await
    }

    pub async fn all(&self) -> EngineResult<Vec<Document>> {
        self.ensure(Operation::All)?;
        self.engine.all().await
    }

    pub async fn filter(&self, filter: &Document) -> EngineResult<Vec<Document>> {
        self.ensure(Operation::Filter)?;
        self.engine.filter(filter).await
    }

    pub async fn find(&self, conditions: &Document) -> EngineResult<Vec<Document>> {
        self.ensure(Operation::Find)?;
        self.engine.find(conditions).await
    }

    pub async fn new_resource(&self, attrs: Document) -> EngineResult<Document> {
        self.ensure(Operation::New)?;
        self.engine.new_resource(self.tag(attrs)).await
    }

    pub async fn sync(&self) -> EngineResult<()> {
        self.ensure(Operation::Sync)?;
        self.engine.sync().await
    }
}

impl fmt::Debug for ResourceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBinding")
            .field("name", &self.name)
            .field("base", self.engine.base())
            .finish()
    }
}
