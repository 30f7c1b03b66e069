//! PostgreSQL-backed stores.
//!
//! Read-only: every query here is a `SELECT`. Session creation, rotation,
//! and cleanup are owned by the login/logout flows upstream, against the
//! same `users` / `user_sessions` tables.

mod session_store;
mod user_store;

use sqlx::FromRow;
use warden_core::error::StoreError;
use warden_core::types::Timestamp;

use crate::models::session::SessionRecord;

pub use session_store::PgSessionStore;
pub use user_store::PgUserStore;

/// Column list shared across session queries to avoid repetition.
pub(crate) const SESSION_COLUMNS: &str = "hash, agent_digest, origin, created_at, expires_at";

/// A `user_sessions` row before conversion to the domain model.
#[derive(Debug, FromRow)]
pub(crate) struct SessionRow {
    hash: String,
    agent_digest: Option<String>,
    origin: Option<String>,
    created_at: Timestamp,
    expires_at: Option<Timestamp>,
}

impl From<SessionRow> for SessionRecord {
    fn from(row: SessionRow) -> Self {
        SessionRecord {
            hash: row.hash,
            agent_digest: row.agent_digest,
            origin: row.origin,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

/// Map a sqlx error onto the collaborator error contract.
pub(crate) fn into_store_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        _ => StoreError::Backend(err.to_string()),
    }
}
