//! Cross-cutting plumbing shared by Outlay services.
//!
//! Provides health handlers, tracing setup, the request-id layer, and
//! serialization helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
