/// Message storage: append-only, listed in creation order
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Message, MessageRecord};

pub async fn insert_message(pool: &PgPool, member_id: Uuid, text: &str) -> Result<Message> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (id, member_id, text, created_at)
        VALUES (gen_random_uuid(), $1, $2, CURRENT_TIMESTAMP)
        RETURNING *
        "#,
    )
    .bind(member_id)
    .bind(text)
    .fetch_one(pool)
    .await?;

    Ok(message)
}

/// All messages, oldest first, with the author's username joined in
pub async fn list_messages(pool: &PgPool) -> Result<Vec<MessageRecord>> {
    let messages = sqlx::query_as::<_, MessageRecord>(
        r#"
        SELECT m.id, mem.username, m.text, m.created_at
        FROM messages m
        JOIN members mem ON mem.id = m.member_id
        ORDER BY m.created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(messages)
}
