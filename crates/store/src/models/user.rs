//! Persisted user model.

use serde::{Deserialize, Serialize};
use warden_core::types::{Timestamp, UserId};

use crate::models::session::SessionRecord;

/// Authoritative user record plus its known sessions (hash-keyed set).
///
/// Owned by the storage layer; the authentication core only reads it. When a
/// resolved identity is built, fields on this record always win over fields
/// the token claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub uuid: UserId,
    pub mail: String,
    pub display_name: Option<String>,
    pub verified: bool,
    pub member_since: Timestamp,
    /// Every session the server still recognizes for this user.
    pub sessions: Vec<SessionRecord>,
}

impl UserRecord {
    /// Look up a session entry by hash.
    ///
    /// The hash is a unique key within one user's session set, so the lookup
    /// is deterministic.
    pub fn session_by_hash(&self, hash: &str) -> Option<&SessionRecord> {
        self.sessions.iter().find(|session| session.hash == hash)
    }
}
