//! Error types for the engine contract.

use crate::capability::Operation;
use resourceful_model::Document;
use std::fmt;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur in engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Engine constructed without a usable configuration.
    #[error("{0}")]
    Configuration(String),

    /// The engine does not provide this capability.
    #[error("Method {operation} is not available for engine {protocol}")]
    Unsupported {
        operation: Operation,
        protocol: String,
    },

    /// The underlying request failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// A request succeeded but its outcome contradicts the operation.
    #[error("{0}")]
    Consistency(String),

    /// No engine registered under this name.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// A request failure with no accompanying body.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(RequestError::new(message))
    }

    /// A request failure together with the body the engine produced.
    pub fn request_with_body(message: impl Into<String>, body: Document) -> Self {
        Self::Request(RequestError::new(message).with_body(body))
    }

    pub fn unsupported(operation: Operation, protocol: impl Into<String>) -> Self {
        Self::Unsupported {
            operation,
            protocol: protocol.into(),
        }
    }

    /// The body delivered alongside a request failure, if any.
    pub fn body(&self) -> Option<&Document> {
        match self {
            Self::Request(err) => err.body.as_ref(),
            _ => None,
        }
    }

    /// The status code carried by a request failure's body.
    pub fn status(&self) -> Option<u16> {
        self.body().and_then(Document::status)
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Failure reported by `Engine::request`.
///
/// Displays as its message alone so callers can match on the exact text
/// a concrete engine produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestError {
    pub message: String,
    pub body: Option<Document>,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Document) -> Self {
        self.body = Some(body);
        self
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestError {}
