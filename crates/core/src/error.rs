//! Error taxonomy for the authentication pipeline.
//!
//! Every variant is terminal for the current resolution attempt: nothing is
//! retried or suppressed inside the core. Translating these into transport
//! responses is the embedding layer's job.

use crate::types::UserId;

/// Why a session failed validation.
///
/// All variants are collapsed under [`AuthError::SessionInvalid`] because the
/// caller-visible remedy is identical (require re-authentication); the reason
/// is carried for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRejection {
    /// The claimed hash matches no session entry on the stored user.
    UnknownSession,
    /// The live session hash no longer matches the claimed hash.
    RotatedSession,
    /// The session is expired and the caller did not allow expired tokens.
    Expired,
}

impl std::fmt::Display for SessionRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionRejection::UnknownSession => write!(f, "no matching session record"),
            SessionRejection::RotatedSession => {
                write!(f, "claimed session differs from live session")
            }
            SessionRejection::Expired => write!(f, "session expired"),
        }
    }
}

/// Infrastructure failure reported by a storage collaborator.
///
/// Kept apart from [`AuthError`]'s validation variants: a store outage says
/// nothing about the request's credentials.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Failure modes of per-request user resolution.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No access token present in the request's credential carrier.
    #[error("No access token present in request credentials")]
    MissingCredentials,

    /// Token present but fails decode or signature verification.
    #[error("Access token rejected: {0}")]
    InvalidToken(String),

    /// The decoded identity references no persisted user.
    #[error("User not found: {uuid}")]
    UserNotFound { uuid: UserId },

    /// The session backing the token is no longer acceptable.
    #[error("Session invalid: {0}")]
    SessionInvalid(SessionRejection),

    /// A storage collaborator failed; not a statement about the credentials.
    #[error(transparent)]
    Store(#[from] StoreError),
}
