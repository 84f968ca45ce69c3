/// Registration, login, and token authentication flows
use once_cell::sync::Lazy;
use sqlx::PgPool;

use crate::db;
use crate::error::{BoardError, Result};
use crate::models::{AuthResponse, LoginRequest, Member, RegisterRequest};
use crate::security::password::{hash_password, verify_password};
use crate::validators::validate_shape;

/// Outcome of resolving a bearer token.
///
/// Passed explicitly through the request path; handlers receive the member
/// for exactly one request and never cache it beyond that.
#[derive(Debug, Clone)]
pub enum AuthResult {
    Authenticated(Member),
    Unauthenticated,
}

// Verified against when login hits an unknown username, so both rejection
// paths cost one argon2 verification.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    hash_password("timing-equalizer")
        .expect("hashing a fixed string only fails on entropy source exhaustion")
});

#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
}

impl AuthService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a member and hand back their bearer token.
    ///
    /// Token issuance is idempotent, so a request that dies between the
    /// member insert and the token insert leaves no stuck state: the next
    /// login completes the pairing.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse> {
        validate_shape(req)?;

        let password_hash = hash_password(&req.password)?;
        let member = db::members::create_member(&self.db, &req.username, &password_hash).await?;
        let token = db::tokens::issue_for(&self.db, member.id).await?;

        tracing::info!(member_id = %member.id, "member registered");

        Ok(AuthResponse {
            token: token.token,
            user: member.public_view(),
        })
    }

    /// Verify credentials and return the member's token.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response cannot be used to probe which usernames exist.
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse> {
        let member = match db::members::find_by_username(&self.db, &req.username).await? {
            Some(member) => member,
            None => {
                // Same argon2 cost as the wrong-password path.
                let _ = verify_password(&req.password, &DUMMY_HASH);
                return Err(BoardError::InvalidCredentials);
            }
        };

        if !verify_password(&req.password, &member.password_hash) {
            return Err(BoardError::InvalidCredentials);
        }

        let token = db::tokens::issue_for(&self.db, member.id).await?;

        tracing::info!(member_id = %member.id, "member logged in");

        Ok(AuthResponse {
            token: token.token,
            user: member.public_view(),
        })
    }

    /// Resolve a bearer token to the member it authenticates.
    ///
    /// Unknown, malformed, and orphaned tokens (member row gone) all come
    /// back as `Unauthenticated`; only storage failures surface as errors.
    pub async fn authenticate(&self, token_value: &str) -> Result<AuthResult> {
        if token_value.is_empty() {
            return Ok(AuthResult::Unauthenticated);
        }

        let member_id = match db::tokens::resolve(&self.db, token_value).await? {
            Some(id) => id,
            None => return Ok(AuthResult::Unauthenticated),
        };

        match db::members::find_by_id(&self.db, member_id).await? {
            Some(member) => Ok(AuthResult::Authenticated(member)),
            None => Ok(AuthResult::Unauthenticated),
        }
    }
}
