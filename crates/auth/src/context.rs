//! Per-request authentication context and the `get_user` pipeline.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};
use warden_core::error::{AuthError, SessionRejection};
use warden_store::UserStore;

use crate::enrich::SessionEnricher;
use crate::identity::{merge_identity, ResolvedUser};
use crate::request::RequestCredentials;
use crate::sso::IdTokenVerifier;
use crate::token::TokenCodec;

/// Options for [`AuthContext::get_user`].
///
/// Only the first call's options are honored for a given request: the
/// resolved user is cached and later calls return it without re-validation.
/// Call sites within one request must agree on these flags.
#[derive(Debug, Clone, Copy)]
pub struct GetUserOptions {
    /// Accept a token whose expiry has passed (password-reset style flows
    /// that must identify the user behind a stale token).
    pub can_access_token_be_expired: bool,
    /// Verify that the live session still matches the one the token was
    /// issued against. Disable only in flows that re-establish a session.
    pub check_for_current_session_changes: bool,
}

impl Default for GetUserOptions {
    fn default() -> Self {
        Self {
            can_access_token_be_expired: false,
            check_for_current_session_changes: true,
        }
    }
}

/// One request's authentication context.
///
/// Owns the single-slot user cache: create exactly one per request and drop
/// it with the request. Nothing here is shared across requests, so the
/// write-once slot needs no further synchronization discipline from callers.
pub struct AuthContext {
    codec: TokenCodec,
    enricher: SessionEnricher,
    users: Arc<dyn UserStore>,
    sso: Option<Arc<dyn IdTokenVerifier>>,
    credentials: RequestCredentials,
    cached_user: OnceCell<Arc<ResolvedUser>>,
}

impl AuthContext {
    pub fn new(
        codec: TokenCodec,
        enricher: SessionEnricher,
        users: Arc<dyn UserStore>,
        credentials: RequestCredentials,
    ) -> Self {
        Self {
            codec,
            enricher,
            users,
            sso: None,
            credentials,
            cached_user: OnceCell::new(),
        }
    }

    /// Attach an external identity-provider verifier.
    pub fn with_sso(mut self, verifier: Arc<dyn IdTokenVerifier>) -> Self {
        self.sso = Some(verifier);
        self
    }

    /// The configured external-identity verifier, if any.
    ///
    /// Used by federated sign-in call sites; not part of the access-token
    /// pipeline.
    pub fn sso(&self) -> Option<&dyn IdTokenVerifier> {
        self.sso.as_deref()
    }

    /// Resolve the authenticated user for this request.
    ///
    /// Fail-fast: checks run in a fixed order and the first failure wins.
    /// The result is cached for the lifetime of this context; repeated calls
    /// return the same [`Arc`] without touching the stores again.
    pub async fn get_user(&self, options: GetUserOptions) -> Result<Arc<ResolvedUser>, AuthError> {
        self.cached_user
            .get_or_try_init(|| self.resolve_user(options))
            .await
            .map(Arc::clone)
    }

    async fn resolve_user(&self, options: GetUserOptions) -> Result<Arc<ResolvedUser>, AuthError> {
        debug!(
            can_access_token_be_expired = options.can_access_token_be_expired,
            check_for_current_session_changes = options.check_for_current_session_changes,
            "resolving user"
        );

        // The raw token must be present before anything else runs.
        let raw = self
            .credentials
            .access_token
            .as_deref()
            .ok_or(AuthError::MissingCredentials)?;

        let claim = self.codec.decode(raw)?;
        let identity = self
            .enricher
            .enrich(claim, &self.credentials.fingerprint())
            .await?;

        // The user must still exist in storage; tokens can outlive accounts.
        let record = self
            .users
            .fetch_by_uid(identity.claim.sub)
            .await?
            .ok_or(AuthError::UserNotFound {
                uuid: identity.claim.sub,
            })?;

        // The claimed session must be one the server still recognizes. The
        // lookup runs against the stored record with the hash taken from the
        // token, not the other way around.
        if record
            .session_by_hash(&identity.transient.claimed_hash)
            .is_none()
        {
            return Err(AuthError::SessionInvalid(SessionRejection::UnknownSession));
        }

        // A claimed hash that diverges from the live session means stolen
        // cookies or a user-agent change on the same session. An
        // unresolvable live session counts as divergence.
        if options.check_for_current_session_changes
            && identity.current_hash() != Some(identity.transient.claimed_hash.as_str())
        {
            warn!(uuid = %identity.claim.sub, "claimed session differs from live session");
            return Err(AuthError::SessionInvalid(SessionRejection::RotatedSession));
        }

        if !options.can_access_token_be_expired && identity.transient.session_expired {
            return Err(AuthError::SessionInvalid(SessionRejection::Expired));
        }

        Ok(Arc::new(merge_identity(&identity, &record)))
    }
}
