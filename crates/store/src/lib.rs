//! Storage collaborators for the warden authentication core.
//!
//! Owns the persisted models ([`models`]), the read-only collaborator
//! contracts ([`UserStore`], [`SessionStore`]), and two implementations: a
//! PostgreSQL store ([`postgres`]) and an in-memory store ([`memory`]) for
//! tests and embedders that run without a database.
//!
//! Nothing in this crate writes: session creation and rotation belong to the
//! login/logout flows upstream.

pub mod memory;
pub mod models;
pub mod postgres;
mod traits;

pub use traits::{SessionStore, UserStore};
