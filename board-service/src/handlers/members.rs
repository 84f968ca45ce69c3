/// Member profile handler
use actix_web::HttpResponse;

use crate::{error::BoardError, middleware::CurrentMember};

/// Current member profile, as resolved by the bearer middleware
pub async fn profile(member: CurrentMember) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(member.0.public_view()))
}
