/// Configuration management
use dotenvy::dotenv;
use std::env;

use crate::error::BoardError;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, BoardError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| BoardError::Config("DATABASE_URL missing".into()))?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        Ok(Self {
            host,
            port,
            database_url,
        })
    }
}
