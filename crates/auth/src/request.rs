//! Request-scoped credential boundary.
//!
//! Cookie and header parsing happen outside this crate; the embedding layer
//! extracts whatever its carrier holds, builds a [`RequestCredentials`], and
//! hands it to [`AuthContext::new`](crate::AuthContext::new).

use sha2::{Digest, Sha256};
use warden_core::types::ClientFingerprint;

/// Raw credentials and client metadata for one request.
#[derive(Debug, Clone, Default)]
pub struct RequestCredentials {
    /// Access token extracted from the request's credential carrier.
    pub access_token: Option<String>,
    /// Remote address as reported by the transport layer.
    pub origin: Option<String>,
    /// Raw user-agent string.
    pub user_agent: Option<String>,
}

impl RequestCredentials {
    /// Derive the client fingerprint for session resolution.
    ///
    /// The user-agent is digested here so the raw string stays at the
    /// transport boundary.
    pub fn fingerprint(&self) -> ClientFingerprint {
        ClientFingerprint {
            origin: self.origin.clone(),
            agent_digest: self.user_agent.as_deref().map(digest_user_agent),
        }
    }
}

/// Compute the SHA-256 hex digest of a raw user-agent string.
pub fn digest_user_agent(agent: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(agent.as_bytes());
    format!("{:x}", hasher.finalize())
}
