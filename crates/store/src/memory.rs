//! In-memory store for tests and embedders that run without Postgres.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use warden_core::error::StoreError;
use warden_core::types::{ClientFingerprint, UserId};

use crate::models::session::SessionRecord;
use crate::models::user::UserRecord;
use crate::traits::{SessionStore, UserStore};

/// Hash-map backed [`UserStore`] + [`SessionStore`].
///
/// Keeps one live session per user; rotation is modeled by replacing that
/// entry through [`MemoryStore::set_current_session`] (rotate-on-login is
/// the login flow's job, not this crate's).
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, UserRecord>,
    current: HashMap<UserId, SessionRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record.
    pub fn put_user(&self, user: UserRecord) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.users.insert(user.uuid, user);
    }

    /// Mark `session` as the live session for `uuid`.
    pub fn set_current_session(&self, uuid: UserId, session: SessionRecord) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.current.insert(uuid, session);
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn fetch_by_uid(&self, uuid: UserId) -> Result<Option<UserRecord>, StoreError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.users.get(&uuid).cloned())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn find_current(
        &self,
        uuid: UserId,
        fingerprint: &ClientFingerprint,
    ) -> Result<Option<SessionRecord>, StoreError> {
        let inner = self.inner.read().expect("store lock poisoned");
        let Some(session) = inner.current.get(&uuid) else {
            return Ok(None);
        };
        // A session established from one user-agent is not current for
        // another; unknown digests on either side stay permissive.
        if let (Some(expected), Some(actual)) =
            (session.agent_digest.as_deref(), fingerprint.agent_digest.as_deref())
        {
            if expected != actual {
                return Ok(None);
            }
        }
        Ok(Some(session.clone()))
    }
}
