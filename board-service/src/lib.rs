// Board Service Library

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod security;
pub mod services;
pub mod telemetry;
pub mod validators;

pub use error::{BoardError, Result};

// Re-export commonly used types
pub use models::{AccessToken, AuthResponse, Member, MemberPublic, Message};
pub use services::auth::{AuthResult, AuthService};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(db: sqlx::PgPool) -> Self {
        let auth = AuthService::new(db.clone());
        Self { db, auth }
    }
}
