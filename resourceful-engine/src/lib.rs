//! Engine base contract for resourceful.
//!
//! An engine is a pluggable persistence backend for one resource type. This
//! crate defines what every engine looks like to the host framework:
//!
//! - [`Engine`] — the operation surface, with default high-level operations
//!   built on a single low-level [`Engine::request`]
//! - [`Capabilities`] — which operations an engine provides
//! - [`EngineBase`] — derived uri, protocol label, host collaborators
//! - [`EngineRegistry`] — engine name to constructor
//! - [`ResourceBinding`] — a resource type bound to an engine
//! - [`BaseEngine`] — the contract with nothing overridden
//!
//! No I/O happens here. Concrete engines live in their own crates and
//! implement `request` (or individual operations) against a real store.
//!
//! # Example
//!
//! ```
//! use resourceful_engine::{init, EngineConfig, EngineRegistry, Host, ResourceBinding};
//!
//! let mut registry = EngineRegistry::new();
//! init(&mut registry);
//!
//! let host = Host::default();
//! let binding = ResourceBinding::bind(
//!     &registry,
//!     &host,
//!     "Company",
//!     "BaseEngine",
//!     EngineConfig::with_uri("http://localhost:5984/companies/"),
//! )
//! .unwrap();
//!
//! assert_eq!(binding.engine().base().base_uri(), "http://localhost:5984/companies/");
//! ```

mod base;
mod base_engine;
mod binding;
pub mod cache;
mod capability;
pub mod config;
mod engine;
mod error;
mod host;
pub mod pluralize;
mod registry;

pub use base::EngineBase;
pub use base_engine::{BaseEngine, BASE_ENGINE_NAME};
pub use binding::ResourceBinding;
pub use cache::{Cache, CacheFactory, MemoryCache, MemoryCacheFactory};
pub use capability::{Capabilities, Operation};
pub use config::{EngineConfig, DEFAULT_CONTENT_TYPE, DEFAULT_PROTOCOL};
pub use engine::{unhandled_request, Engine, UpdateOutcome};
pub use error::{EngineError, EngineResult, RequestError};
pub use host::Host;
pub use pluralize::{EnglishPluralizer, Pluralizer};
pub use registry::{init, EngineFactory, EngineRegistry};

pub use resourceful_model::{status, Document, Method};
