/// Unauthenticated greeting endpoint
use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(HelloResponse {
        message: "Hello!".to_string(),
        timestamp: Utc::now(),
    })
}
