//! Outcome codes carried in a document's transient `status` field.
//!
//! The base contract synthesizes these when a concrete engine supplies none,
//! and inspects them to decide success on `save`, `update` and `destroy`.

/// Fetched record is usable as a merge base.
pub const OK: u16 = 200;

/// Write succeeded.
pub const CREATED: u16 = 201;

/// Delete succeeded.
pub const NO_CONTENT: u16 = 204;

/// Record does not exist.
pub const NOT_FOUND: u16 = 404;

pub const INTERNAL_ERROR: u16 = 500;
