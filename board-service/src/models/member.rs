/// Member model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Identity record as stored. Deliberately does not implement `Serialize`:
/// the password hash must never reach a response body, so anything leaving
/// the service goes through [`MemberPublic`].
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn public_view(&self) -> MemberPublic {
        MemberPublic {
            id: self.id,
            username: self.username.clone(),
            created_at: self.created_at,
        }
    }
}

/// The `user` object shape exposed by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberPublic {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "username must be 1-150 characters"))]
    pub username: String,
    #[validate(length(min = 4, max = 128, message = "password must be 4-128 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Register/Login response with the bearer token and public member view
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: MemberPublic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_view_never_serializes_password_hash() {
        let member = Member {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$salt$digest".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(member.public_view()).expect("serialize");
        let obj = json.as_object().expect("object");
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("username"));
        assert!(obj.contains_key("created_at"));
        assert!(!obj.contains_key("password_hash"));
        assert_eq!(obj.len(), 3);
    }
}
