/// Bearer token authentication middleware for member-scoped routes.
/// Resolves the opaque token and adds the member to request extensions.
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::{error::BoardError, models::Member, services::auth::AuthResult, AppState};

/// Member resolved from the bearer token, valid for this request only
#[derive(Debug, Clone)]
pub struct CurrentMember(pub Member);

/// Bearer authentication middleware factory
pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // Take an owned copy of the header before any mutable access to
            // the request extensions.
            let auth_header = match req.headers().get("Authorization") {
                Some(header) => match header.to_str() {
                    Ok(h) => h.to_string(),
                    Err(_) => return Err(BoardError::Unauthenticated.into()),
                },
                None => return Err(BoardError::Unauthenticated.into()),
            };

            let token = match auth_header.strip_prefix("Bearer ") {
                Some(t) => t.trim(),
                None => return Err(BoardError::Unauthenticated.into()),
            };

            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| BoardError::Internal("application state missing".into()))?;

            let member = match state.auth.authenticate(token).await? {
                AuthResult::Authenticated(member) => member,
                AuthResult::Unauthenticated => return Err(BoardError::Unauthenticated.into()),
            };

            req.extensions_mut().insert(CurrentMember(member));

            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

impl FromRequest for CurrentMember {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<CurrentMember>().cloned() {
            Some(member) => ready(Ok(member)),
            None => ready(Err(BoardError::Unauthenticated.into())),
        }
    }
}
