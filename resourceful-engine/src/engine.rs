//! The engine contract.
//!
//! [`Engine`] declares the full operation surface a host resource type may
//! invoke. Concrete engines implement [`Engine::request`] (or override the
//! individual operations) to perform real I/O; the default high-level
//! operations translate into `request` calls and normalize what comes back:
//!
//! - `put`/`post`/`create` default a missing status to `201`
//! - `get` stamps the requested id onto records that lack one
//! - `save` enforces `201` on the put path
//! - `update` is get, merge, put
//! - `destroy` succeeds only on `204`
//!
//! Every operation resolves exactly once, as the output of its future.

use crate::base::EngineBase;
use crate::capability::{Capabilities, Operation};
use crate::error::{EngineError, EngineResult, RequestError};
use async_trait::async_trait;
use resourceful_model::{status, Document, Method};
use tracing::{debug, warn};

/// Result of [`Engine::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The merged document was written; holds the put result.
    Written(Document),
    /// The fetched record was neither `200` nor `404`, so nothing was
    /// written; holds the record exactly as fetched.
    Aborted(Document),
}

impl UpdateOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }

    pub fn document(&self) -> &Document {
        match self {
            Self::Written(doc) | Self::Aborted(doc) => doc,
        }
    }

    pub fn into_document(self) -> Document {
        match self {
            Self::Written(doc) | Self::Aborted(doc) => doc,
        }
    }
}

/// A pluggable persistence backend for one resource type.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Construction-time state: base uri, protocol, collaborators.
    fn base(&self) -> &EngineBase;

    /// Operations this engine provides. The host refuses everything else
    /// with [`EngineError::Unsupported`] before dispatching.
    fn capabilities(&self) -> Capabilities {
        Capabilities::base()
    }

    fn protocol(&self) -> &str {
        self.base().protocol()
    }

    // ── Low level ───────────────────────────────────────────────────

    /// Performs one low-level request. Concrete engines override this.
    ///
    /// The default resolves the target but has no transport, so every
    /// known method fails with a body carrying the status a real engine
    /// would report, and unknown methods fail without a body.
    async fn request(
        &self,
        method: Method,
        id: Option<&str>,
        doc: Option<&Document>,
    ) -> EngineResult<Document> {
        Err(unhandled_request(self.base(), &method, id, doc).into())
    }

    // ── Record operations ───────────────────────────────────────────

    /// Fetches a record, stamping `_id` with `id` when the record has none.
    async fn get(&self, id: &str) -> EngineResult<Document> {
        let mut doc = self.request(Method::Get, Some(id), None).await?;
        doc.ensure_id(id);
        Ok(doc)
    }

    /// Checks whether a record exists. No post-processing.
    async fn head(&self, id: &str) -> EngineResult<Document> {
        self.request(Method::Head, Some(id), None).await
    }

    /// Overwrites the record at `id`. A missing status defaults to `201`.
    async fn put(&self, id: &str, doc: Document) -> EngineResult<Document> {
        let res = self.request(Method::Put, Some(id), Some(&doc)).await?;
        Ok(res.with_default_status(status::CREATED))
    }

    /// Creates a record in the document's collection. A missing status
    /// defaults to `201`.
    async fn post(&self, doc: Document) -> EngineResult<Document> {
        let res = self.request(Method::Post, None, Some(&doc)).await?;
        Ok(res.with_default_status(status::CREATED))
    }

    /// Alias for [`Engine::post`].
    async fn create(&self, doc: Document) -> EngineResult<Document> {
        self.post(doc).await
    }

    /// Puts `doc` at `id` when given one, otherwise posts it.
    ///
    /// On the put path any status other than `201` is a consistency
    /// failure. The post path passes its result through unchecked.
    async fn save(&self, id: Option<&str>, doc: Document) -> EngineResult<Document> {
        let Some(id) = id else {
            return self.post(doc).await;
        };

        let res = self.put(id, doc).await?;
        if res.status() != Some(status::CREATED) {
            warn!(protocol = %self.protocol(), id, status = ?res.status(), "Put returned unexpected status");
            return Err(EngineError::Consistency(format!(
                "Failed to put document: {id}"
            )));
        }
        Ok(res)
    }

    /// Read-modify-write: fetches `id`, shallow-merges `doc` over it and
    /// puts the result.
    ///
    /// A `404` record is treated as an empty merge base. The merge base
    /// drops the transient `status` and an `_id` equal to `id`, since the
    /// put is addressed by `id` already.
    async fn update(&self, id: &str, doc: Document) -> EngineResult<UpdateOutcome> {
        let mut current = self.get(id).await?;
        if !current.is_mergeable() {
            debug!(protocol = %self.protocol(), id, status = ?current.status(), "Update aborted");
            return Ok(UpdateOutcome::Aborted(current));
        }

        if current.take_status() == Some(status::NOT_FOUND) {
            current = Document::new();
        }
        if current.id() == Some(id) {
            current.remove(resourceful_model::ID_FIELD);
        }
        let written = self.put(id, current.merged(doc)).await?;
        Ok(UpdateOutcome::Written(written))
    }

    /// Deletes a record.
    ///
    /// Succeeds only when the request reports `204`. A request that
    /// completes with another status yields a status-only document; a
    /// failed request keeps its error with the body reduced to its status.
    async fn destroy(&self, id: &str) -> EngineResult<Document> {
        match self.request(Method::Del, Some(id), None).await {
            Ok(body) if body.status() == Some(status::NO_CONTENT) => {
                Ok(body.with_default_status(status::NO_CONTENT))
            }
            Ok(body) => Ok(body.status_only()),
            Err(EngineError::Request(mut err)) => {
                err.body = err.body.map(|body| body.status_only());
                Err(err.into())
            }
            Err(err) => Err(err),
        }
    }

    // ── Collection operations ───────────────────────────────────────

    /// Loads a list of raw records into the engine.
    async fn load(&self, _docs: Vec<Document>) -> EngineResult<Vec<Document>> {
        Err(self.base().unsupported(Operation::Load))
    }

    async fn all(&self) -> EngineResult<Vec<Document>> {
        Err(self.base().unsupported(Operation::All))
    }

    async fn filter(&self, _filter: &Document) -> EngineResult<Vec<Document>> {
        Err(self.base().unsupported(Operation::Filter))
    }

    async fn find(&self, _conditions: &Document) -> EngineResult<Vec<Document>> {
        Err(self.base().unsupported(Operation::Find))
    }

    /// Instantiates an unsaved record from the given attributes.
    async fn new_resource(&self, _attrs: Document) -> EngineResult<Document> {
        Err(self.base().unsupported(Operation::New))
    }

    async fn sync(&self) -> EngineResult<()> {
        Err(self.base().unsupported(Operation::Sync))
    }
}

/// The failure `request` produces for a method the engine has no transport for.
pub fn unhandled_request(
    base: &EngineBase,
    method: &Method,
    id: Option<&str>,
    doc: Option<&Document>,
) -> RequestError {
    let (message, body) = match method {
        Method::Del => ("No delete method.".to_string(), Some(status::INTERNAL_ERROR)),
        Method::Get => ("No get method.".to_string(), Some(status::NOT_FOUND)),
        Method::Head => ("No head method.".to_string(), Some(status::NOT_FOUND)),
        Method::Post => ("No post method.".to_string(), Some(status::INTERNAL_ERROR)),
        Method::Put => ("No put method.".to_string(), Some(status::INTERNAL_ERROR)),
        Method::Other(label) => (format!("No {label} handler"), None),
    };

    debug!(
        protocol = %base.protocol(),
        method = %method,
        target = %base.target(method, id, doc),
        "No transport for request"
    );

    let err = RequestError::new(message);
    match body {
        Some(code) => err.with_body(Document::with_status(code)),
        None => err,
    }
}
