//! Document model for resourceful engines.
//!
//! Defines the types every engine exchanges with the host framework:
//! - [`Document`] — an untyped key/value record (a JSON object)
//! - [`status`] — the HTTP-like outcome codes carried in a document's `status` field
//! - [`Method`] — the low-level request verbs routed by `Engine::request`
//!
//! These types carry no I/O of their own. Engines consume and produce them;
//! the host framework hands them to application code.

mod document;
mod method;
pub mod status;

pub use document::{Document, ID_FIELD, RESOURCE_FIELD, STATUS_FIELD};
pub use method::Method;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur when building model values.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("document must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}
