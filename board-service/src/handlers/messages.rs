/// Message board handlers
use actix_web::{web, HttpResponse};

use crate::{
    db,
    error::BoardError,
    middleware::CurrentMember,
    models::{MessageRecord, PostMessageRequest},
    validators::validate_shape,
    AppState,
};

/// All messages in creation order, with author usernames
pub async fn list_messages(
    state: web::Data<AppState>,
    _member: CurrentMember,
) -> Result<HttpResponse, BoardError> {
    let messages = db::messages::list_messages(&state.db).await?;
    Ok(HttpResponse::Ok().json(messages))
}

/// Append a message attributed to the authenticated member
pub async fn create_message(
    state: web::Data<AppState>,
    member: CurrentMember,
    payload: web::Json<PostMessageRequest>,
) -> Result<HttpResponse, BoardError> {
    validate_shape(&payload.0)?;

    let message = db::messages::insert_message(&state.db, member.0.id, &payload.text).await?;

    Ok(HttpResponse::Created().json(MessageRecord {
        id: message.id,
        username: member.0.username.clone(),
        text: message.text,
        created_at: message.created_at,
    }))
}
