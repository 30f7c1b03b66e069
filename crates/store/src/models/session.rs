//! Session record model.

use serde::{Deserialize, Serialize};
use warden_core::types::Timestamp;

/// One entry in a user's session set, identified by its stable `hash`.
///
/// Rotation replaces the hash on the *live* session; a token issued before a
/// rotation therefore claims a hash that no longer matches the record
/// resolved from current request context. That divergence is what the
/// pipeline's hijack check looks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique key within one user's session set.
    pub hash: String,
    /// SHA-256 hex digest of the user-agent the session was established with.
    pub agent_digest: Option<String>,
    /// Remote address the session was established from. Recorded for audit;
    /// not a lookup key, since devices roam networks.
    pub origin: Option<String>,
    pub created_at: Timestamp,
    /// Absent when the session does not expire server-side.
    pub expires_at: Option<Timestamp>,
}

impl SessionRecord {
    /// Whether the record is past its server-side expiry at `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}
