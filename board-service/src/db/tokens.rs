/// Token binding storage
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{BoardError, Result};
use crate::models::AccessToken;
use crate::security::token::generate_token_value;

/// Issue a token for a member, idempotently.
///
/// The fast path returns the existing binding unchanged. On first issuance
/// the unique index on `member_id` arbitrates concurrent inserts: the loser
/// gets no row back from `ON CONFLICT DO NOTHING` and re-fetches the
/// winner's row, so exactly one token value ever becomes canonical.
pub async fn issue_for(pool: &PgPool, member_id: Uuid) -> Result<AccessToken> {
    if let Some(existing) = find_by_member(pool, member_id).await? {
        return Ok(existing);
    }

    let value = generate_token_value()?;

    let inserted = sqlx::query_as::<_, AccessToken>(
        r#"
        INSERT INTO access_tokens (id, member_id, token, created_at)
        VALUES (gen_random_uuid(), $1, $2, CURRENT_TIMESTAMP)
        ON CONFLICT (member_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(member_id)
    .bind(&value)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(token) => Ok(token),
        None => find_by_member(pool, member_id)
            .await?
            .ok_or_else(|| BoardError::Database("token binding missing after conflict".into())),
    }
}

/// Resolve a token value to the member it authenticates.
///
/// Unknown or malformed values yield `Ok(None)` — the expected
/// unauthenticated outcome, distinct from storage failures which are fatal
/// to the request.
pub async fn resolve(pool: &PgPool, token_value: &str) -> Result<Option<Uuid>> {
    let member_id =
        sqlx::query_scalar::<_, Uuid>("SELECT member_id FROM access_tokens WHERE token = $1")
            .bind(token_value)
            .fetch_optional(pool)
            .await?;

    Ok(member_id)
}

async fn find_by_member(pool: &PgPool, member_id: Uuid) -> Result<Option<AccessToken>> {
    let token =
        sqlx::query_as::<_, AccessToken>("SELECT * FROM access_tokens WHERE member_id = $1")
            .bind(member_id)
            .fetch_optional(pool)
            .await?;

    Ok(token)
}
