//! Session types for the Outlay tracker.
//!
//! Provides JWT session issue/validation and the session cookie builder.
//! Sessions are stateless signed tokens: created on successful code
//! verification, valid for a fixed window, never refreshed on access.

pub mod cookie;
pub mod token;
