//! Read-only collaborator contracts consumed by the authentication pipeline.

use async_trait::async_trait;
use warden_core::error::StoreError;
use warden_core::types::{ClientFingerprint, UserId};

use crate::models::session::SessionRecord;
use crate::models::user::UserRecord;

/// Authoritative fetch of persisted users by stable identifier.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user and their session set by uuid.
    ///
    /// Absence is `Ok(None)`, never an error: a token referencing a deleted
    /// account is a validation outcome, not an infrastructure failure.
    async fn fetch_by_uid(&self, uuid: UserId) -> Result<Option<UserRecord>, StoreError>;
}

/// Resolution of the *current* session for a client context.
///
/// The returned record reflects the latest rotation. Comparing its hash
/// against a token's claimed hash is how stale cookies and stolen tokens
/// surface. How the backend keys sessions to a context (and when it rotates
/// them) is its own concern; this core only reads the result.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_current(
        &self,
        uuid: UserId,
        fingerprint: &ClientFingerprint,
    ) -> Result<Option<SessionRecord>, StoreError>;
}
