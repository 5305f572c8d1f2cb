//! Shared test helpers for engine tests.

#![allow(dead_code)]

use async_trait::async_trait;
use resourceful_engine::{
    unhandled_request, Capabilities, Document, Engine, EngineBase, EngineConfig, EngineResult,
    Host, Method,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

pub const STORE_URI: &str = "http://store.test/db";

/// Routes engine logs to the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a document from a JSON object literal.
pub fn doc(value: serde_json::Value) -> Document {
    Document::from_value(value).expect("test documents are JSON objects")
}

/// One call observed by [`ScriptedEngine::request`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub id: Option<String>,
    pub doc: Option<Document>,
    pub target: String,
}

/// An engine whose `request` replays queued results per method and records
/// every call. Methods with nothing queued fall back to the default failure.
pub struct ScriptedEngine {
    base: EngineBase,
    capabilities: Capabilities,
    responses: Mutex<HashMap<Method, VecDeque<EngineResult<Document>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::with_uri(STORE_URI).protocol("scripted"))
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            base: EngineBase::new(config, &Host::default()).unwrap(),
            capabilities: Capabilities::base(),
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Queues `result` for the next `method` request.
    pub fn respond(&self, method: Method, result: EngineResult<Document>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(result);
        self
    }

    pub fn respond_ok(&self, method: Method, body: serde_json::Value) -> &Self {
        self.respond(method, Ok(doc(body)))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, method: Method) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method)
            .collect()
    }
}

#[async_trait]
impl Engine for ScriptedEngine {
    fn base(&self) -> &EngineBase {
        &self.base
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities.clone()
    }

    async fn request(
        &self,
        method: Method,
        id: Option<&str>,
        doc: Option<&Document>,
    ) -> EngineResult<Document> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.clone(),
            id: id.map(str::to_string),
            doc: doc.cloned(),
            target: self.base.target(&method, id, doc),
        });

        let queued = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&method)
            .and_then(VecDeque::pop_front);

        match queued {
            Some(result) => result,
            None => Err(unhandled_request(&self.base, &method, id, doc).into()),
        }
    }
}
