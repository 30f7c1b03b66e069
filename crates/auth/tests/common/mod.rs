//! Shared fixtures and counting mock collaborators for pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use warden_auth::config::TokenConfig;
use warden_auth::enrich::SessionEnricher;
use warden_auth::token::{IdentityClaim, TokenCodec};
use warden_auth::{AuthContext, RequestCredentials};
use warden_core::error::StoreError;
use warden_core::types::{ClientFingerprint, UserId};
use warden_store::models::session::SessionRecord;
use warden_store::models::user::UserRecord;
use warden_store::{SessionStore, UserStore};

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

pub fn test_codec() -> TokenCodec {
    TokenCodec::new(TokenConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry_mins: 15,
    })
}

pub fn session(hash: &str) -> SessionRecord {
    SessionRecord {
        hash: hash.to_string(),
        agent_digest: None,
        origin: None,
        created_at: Utc::now(),
        expires_at: None,
    }
}

pub fn user(uuid: UserId, mail: &str, session_hashes: &[&str]) -> UserRecord {
    UserRecord {
        uuid,
        mail: mail.to_string(),
        display_name: None,
        verified: true,
        member_since: Utc::now(),
        sessions: session_hashes.iter().map(|h| session(h)).collect(),
    }
}

/// A claim set valid for the next 15 minutes.
pub fn claim(sub: UserId, session_hash: &str) -> IdentityClaim {
    let now = Utc::now().timestamp();
    IdentityClaim {
        sub,
        iat: now,
        exp: now + 900,
        session_hash: session_hash.to_string(),
        mail: None,
        display_name: None,
    }
}

// ---------------------------------------------------------------------------
// Counting mock collaborators
// ---------------------------------------------------------------------------

/// [`UserStore`] serving one fixed record, counting fetches.
pub struct CountingUserStore {
    record: Option<UserRecord>,
    fetches: AtomicUsize,
}

impl CountingUserStore {
    pub fn serving(record: UserRecord) -> Arc<Self> {
        Arc::new(Self {
            record: Some(record),
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            record: None,
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for CountingUserStore {
    async fn fetch_by_uid(&self, uuid: UserId) -> Result<Option<UserRecord>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.record.clone().filter(|record| record.uuid == uuid))
    }
}

/// [`SessionStore`] serving one fixed live session, counting lookups.
pub struct CountingSessionStore {
    current: Option<SessionRecord>,
    lookups: AtomicUsize,
}

impl CountingSessionStore {
    pub fn serving(current: SessionRecord) -> Arc<Self> {
        Arc::new(Self {
            current: Some(current),
            lookups: AtomicUsize::new(0),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            current: None,
            lookups: AtomicUsize::new(0),
        })
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for CountingSessionStore {
    async fn find_current(
        &self,
        _uuid: UserId,
        _fingerprint: &ClientFingerprint,
    ) -> Result<Option<SessionRecord>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.current.clone())
    }
}

/// [`UserStore`] whose backend is down.
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn fetch_by_uid(&self, _uuid: UserId) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Context assembly
// ---------------------------------------------------------------------------

/// Build a per-request context over the given collaborators.
pub fn context(
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    access_token: Option<String>,
) -> AuthContext {
    AuthContext::new(
        test_codec(),
        SessionEnricher::new(sessions),
        users,
        RequestCredentials {
            access_token,
            origin: Some("203.0.113.7".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
        },
    )
}
