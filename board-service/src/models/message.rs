/// Message models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub member_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row with the author's username joined in
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MessageRecord {
    pub id: Uuid,
    pub username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PostMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "text must be 1-2000 characters"))]
    pub text: String,
}
