//! HTTP API layer for golos.
//!
//! This crate provides the REST surface:
//!
//! - **Endpoints**: one module per entity, nested under `/golos` by the server
//! - **Extractors**: JSON body decoding with the standard error shape
//! - **State**: the service handles shared across handlers
//!
//! Built on Axum 0.8. No business logic lives here; handlers decode, run
//! structural validation through the service inputs, and re-encode.

pub mod endpoints;
pub mod extractors;
pub mod response;
pub mod state;

pub use endpoints::router;
pub use state::AppState;
