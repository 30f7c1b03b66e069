//! Persisted domain models.
//!
//! These are read-only views for the authentication pipeline; the storage
//! layer owns their lifecycle.

pub mod session;
pub mod user;
