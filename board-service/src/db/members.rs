/// Member credential storage
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{BoardError, Result};
use crate::models::Member;

/// Create a new member.
///
/// Uniqueness is enforced by the unique index on `username` inside a single
/// INSERT, so two concurrent registrations for the same name cannot both
/// succeed; the loser surfaces as `UsernameTaken`.
pub async fn create_member(pool: &PgPool, username: &str, password_hash: &str) -> Result<Member> {
    let member = sqlx::query_as::<_, Member>(
        r#"
        INSERT INTO members (id, username, password_hash, created_at)
        VALUES (gen_random_uuid(), $1, $2, CURRENT_TIMESTAMP)
        RETURNING *
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => BoardError::UsernameTaken,
        other => BoardError::from(other),
    })?;

    Ok(member)
}

/// Find member by username
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<Member>> {
    let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(member)
}

/// Find member by ID
pub async fn find_by_id(pool: &PgPool, member_id: Uuid) -> Result<Option<Member>> {
    let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
        .bind(member_id)
        .fetch_optional(pool)
        .await?;

    Ok(member)
}
