//! Read-only access to the `users` table and its session set.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use warden_core::error::StoreError;
use warden_core::types::{Timestamp, UserId};

use crate::models::user::UserRecord;
use crate::postgres::{into_store_error, SessionRow, SESSION_COLUMNS};
use crate::traits::UserStore;

/// Column list shared across queries to avoid repetition.
const USER_COLUMNS: &str = "uuid, mail, display_name, verified, member_since";

/// A `users` row before session assembly.
#[derive(Debug, FromRow)]
struct UserRow {
    uuid: UserId,
    mail: String,
    display_name: Option<String>,
    verified: bool,
    member_since: Timestamp,
}

/// [`UserStore`] over a Postgres pool.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn fetch_by_uid(&self, uuid: UserId) -> Result<Option<UserRecord>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE uuid = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(into_store_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {SESSION_COLUMNS} FROM user_sessions
             WHERE user_uuid = $1
             ORDER BY created_at"
        );
        let sessions = sqlx::query_as::<_, SessionRow>(&query)
            .bind(uuid)
            .fetch_all(&self.pool)
            .await
            .map_err(into_store_error)?;

        Ok(Some(UserRecord {
            uuid: row.uuid,
            mail: row.mail,
            display_name: row.display_name,
            verified: row.verified,
            member_since: row.member_since,
            sessions: sessions.into_iter().map(Into::into).collect(),
        }))
    }
}
