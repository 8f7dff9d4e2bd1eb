use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, HttpMessage,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::AppState;

/// Attaches the caller's identity to every request that carries a usable bearer token.
///
/// This middleware never rejects. Policy lives in the `Authenticated` and `AdminUser`
/// extractors, which read the `CurrentUser` stored in the request extensions here.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = extract_token(&req);

            if let Some(token) = token {
                match req.app_data::<web::Data<AppState>>().cloned() {
                    Some(state) => {
                        if let Some(user) = state.auth_handler.authenticate(Some(token.as_str())).await {
                            tracing::debug!("Request authenticated as user {}", user.id);
                            req.extensions_mut().insert(user);
                        }
                    }
                    None => tracing::error!("AppState missing in auth middleware"),
                }
            }

            service.call(req).await
        })
    }
}

/// Token from `Authorization: Bearer <token>`; the scheme is case-insensitive.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(parse_bearer)
}

fn parse_bearer(header: &str) -> Option<String> {
    let parts: Vec<&str> = header.split_whitespace().collect();
    if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
        Some(parts[1].to_string())
    } else {
        None
    }
}
