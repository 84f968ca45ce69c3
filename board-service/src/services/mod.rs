pub mod auth;

pub use auth::{AuthResult, AuthService};
