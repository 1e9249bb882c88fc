//! Core business logic for golos.
//!
//! Services own identifier and timestamp assignment, password hashing,
//! pagination normalization and the pre-flight guard checks; everything
//! else is delegated to the repositories in `golos-db`.

pub mod pagination;
pub mod services;

pub use services::*;
