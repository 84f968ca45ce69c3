/// Access token binding
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per member: the opaque bearer token value bound to that member.
/// Issuance is idempotent, so repeated logins observe the same row.
#[derive(Debug, Clone, FromRow)]
pub struct AccessToken {
    pub id: Uuid,
    pub member_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
}
