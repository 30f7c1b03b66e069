//! External identity-provider verification seam.
//!
//! Federated sign-in verifies a provider-issued id token (Google and
//! friends) outside the primary access-token pipeline. The capability is
//! pluggable: embedders construct a verifier with their provider client
//! configuration and attach it via
//! [`AuthContext::with_sso`](crate::AuthContext::with_sso). This crate ships
//! no provider implementation.

use async_trait::async_trait;
use warden_core::error::AuthError;

/// Identity asserted by an external provider after verifying an id token.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalIdentity {
    /// Provider-scoped stable subject identifier.
    pub subject: String,
    pub mail: Option<String>,
    /// Whether the provider itself vouches for the mail address.
    pub mail_verified: bool,
    pub display_name: Option<String>,
}

/// Verifies provider-issued id tokens.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    /// Verify `raw_id_token` against the provider's trust material.
    ///
    /// Rejections surface as [`AuthError::InvalidToken`].
    async fn verify(&self, raw_id_token: &str) -> Result<ExternalIdentity, AuthError>;
}
