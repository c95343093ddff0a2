//! # DocStore - Document Storage Gateway
//!
//! An HTTP-facing service that accepts binary document uploads, validates
//! them against policy, persists them in an object store, and offers
//! retrieval, enumeration, and deletion by name.
//!
//! ## Architecture Layers
//!
//! - **Domain**: document descriptors and the validation policy
//! - **Application**: the document gateway and the object-store port
//! - **Infrastructure**: the filesystem-backed store adapter
//! - **API**: HTTP handlers, router, and error rendering
//!
//! The gateway is stateless; the object store is the sole system of record.
//! Every operation returns an explicit success/failure result, with store
//! failures logged at the gateway boundary and rendered to callers as fixed,
//! non-leaking messages.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use api::router::AppState;
pub use application::gateway::DocumentGateway;
pub use application::ports;
pub use config::Config;
pub use domain::{ValidationOutcome, ValidationPolicy};
pub use infrastructure::storage::LocalObjectStore;
