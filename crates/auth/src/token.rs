//! Access-token encoding and validation.
//!
//! Access tokens are HS256-signed JWTs carrying an [`IdentityClaim`].
//! Signature and payload shape are verified here; expiry is deliberately
//! NOT enforced at this layer. Whether an expired token is acceptable is a
//! pipeline policy (`can_access_token_be_expired`), so `exp` is decoded and
//! judged later, in the session-expiry gate.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use warden_core::error::AuthError;
use warden_core::types::UserId;

use crate::config::TokenConfig;

/// Claims embedded in every access token.
///
/// Immutable once decoded. Everything here is self-asserted until the
/// pipeline confirms it against storage; the merge gives storage priority.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IdentityClaim {
    /// Subject -- the user's stable uuid.
    pub sub: UserId,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Hash of the session this token was issued against.
    pub session_hash: String,
    /// Mail address at issuance time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    /// Display name at issuance time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// HS256 encoder/validator for access tokens.
///
/// Pure: a function of the input token and the configured trust material,
/// with no storage access.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    config: TokenConfig,
}

impl TokenCodec {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Verify signature and shape, returning the embedded claims.
    ///
    /// Expired tokens decode successfully; see the module docs.
    pub fn decode(&self, raw: &str) -> Result<IdentityClaim, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        decode::<IdentityClaim>(
            raw,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|err| AuthError::InvalidToken(err.to_string()))
    }

    /// Sign an access token for `sub` bound to `session_hash`, with the
    /// configured lifetime.
    pub fn issue(&self, sub: UserId, session_hash: &str) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp();
        self.sign(&IdentityClaim {
            sub,
            iat: now,
            exp: now + self.config.access_token_expiry_mins * 60,
            session_hash: session_hash.to_string(),
            mail: None,
            display_name: None,
        })
    }

    /// Sign an exact claim set.
    ///
    /// Used by login flows that embed profile fields at issuance, and by
    /// tests that need precise `iat`/`exp` control.
    pub fn sign(&self, claims: &IdentityClaim) -> Result<String, AuthError> {
        encode(
            &Header::default(), // HS256
            claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|err| AuthError::InvalidToken(err.to_string()))
    }
}
