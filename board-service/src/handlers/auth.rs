/// Authentication handlers
use actix_web::{web, HttpResponse};

use crate::{
    error::BoardError,
    models::{LoginRequest, RegisterRequest},
    AppState,
};

/// Register endpoint handler
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, BoardError> {
    let req = RegisterRequest {
        username: payload.username.trim().to_string(),
        password: payload.password.clone(),
    };

    let response = state.auth.register(&req).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Login endpoint handler
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, BoardError> {
    let req = LoginRequest {
        username: payload.username.trim().to_string(),
        password: payload.password.clone(),
    };

    let response = state.auth.login(&req).await?;
    Ok(HttpResponse::Ok().json(response))
}
