//! Session enrichment: attaching transient session state to a decoded claim.
//!
//! Decoding is pure cryptography; session state lives server-side and can
//! rotate or be revoked independently of any token. Keeping the two steps
//! apart means a claim never gains session authority it did not prove
//! against the store.

use std::sync::Arc;

use warden_core::error::AuthError;
use warden_core::types::ClientFingerprint;
use warden_store::models::session::SessionRecord;
use warden_store::SessionStore;

use crate::token::IdentityClaim;

/// Transient, request-only session attributes.
///
/// These exist to be checked by the pipeline and discarded with the request;
/// they are never merged into storage.
#[derive(Debug, Clone)]
pub struct TransientSession {
    /// The session hash the token claims it was issued against.
    pub claimed_hash: String,
    /// The live session resolved from request context, if any.
    pub session: Option<SessionRecord>,
    /// Whether the token, or the resolved session itself, is past expiry.
    pub session_expired: bool,
}

/// A decoded claim plus its transient session attributes.
#[derive(Debug, Clone)]
pub struct EnrichedIdentity {
    pub claim: IdentityClaim,
    pub transient: TransientSession,
}

impl EnrichedIdentity {
    /// Hash of the live session, when one was resolved.
    pub fn current_hash(&self) -> Option<&str> {
        self.transient.session.as_ref().map(|s| s.hash.as_str())
    }
}

/// Resolves the session lineage implied by a decoded claim.
pub struct SessionEnricher {
    sessions: Arc<dyn SessionStore>,
}

impl SessionEnricher {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Attach transient session attributes to `claim`.
    ///
    /// Failing to resolve a live session is surfaced as absence, not an
    /// error; the pipeline decides what absence means for the request.
    pub async fn enrich(
        &self,
        claim: IdentityClaim,
        fingerprint: &ClientFingerprint,
    ) -> Result<EnrichedIdentity, AuthError> {
        let session = self.sessions.find_current(claim.sub, fingerprint).await?;

        let now = chrono::Utc::now();
        let session_expired =
            claim.exp <= now.timestamp() || session.as_ref().is_some_and(|s| s.is_expired(now));

        Ok(EnrichedIdentity {
            transient: TransientSession {
                claimed_hash: claim.session_hash.clone(),
                session,
                session_expired,
            },
            claim,
        })
    }
}
