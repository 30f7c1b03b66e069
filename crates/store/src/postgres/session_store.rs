//! Resolution of the live session from the `user_sessions` table.

use async_trait::async_trait;
use sqlx::PgPool;
use warden_core::error::StoreError;
use warden_core::types::{ClientFingerprint, UserId};

use crate::models::session::SessionRecord;
use crate::postgres::{into_store_error, SessionRow, SESSION_COLUMNS};
use crate::traits::SessionStore;

/// [`SessionStore`] over a Postgres pool.
///
/// `is_current` is flipped by the rotation performed in login/refresh flows;
/// this store only reads the flag.
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn find_current(
        &self,
        uuid: UserId,
        fingerprint: &ClientFingerprint,
    ) -> Result<Option<SessionRecord>, StoreError> {
        // The user-agent digest narrows the lookup when the transport layer
        // provided one; origin is stored for audit only.
        let query = format!(
            "SELECT {SESSION_COLUMNS} FROM user_sessions
             WHERE user_uuid = $1
               AND is_current = true
               AND ($2::text IS NULL OR agent_digest = $2)
             ORDER BY created_at DESC
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, SessionRow>(&query)
            .bind(uuid)
            .bind(fingerprint.agent_digest.as_deref())
            .fetch_optional(&self.pool)
            .await
            .map_err(into_store_error)?;

        Ok(row.map(Into::into))
    }
}
