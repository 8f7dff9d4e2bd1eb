use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};
use crate::{entities::user::CurrentUser, errors::AppError};

/// Extractor for the identity the authenticator attached to the request.
/// Returns 401 if the request is anonymous.
/// Usage: Add `user: Authenticated` as the first parameter of your handler function,
/// so the check runs before the body is read.
/// Every guarded route is admin-only today, so only `AdminUser` is mounted.
#[derive(Debug)]
pub struct Authenticated(pub CurrentUser);

impl FromRequest for Authenticated {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CurrentUser>() {
            Some(user) => ready(Ok(Authenticated(user.clone()))),
            None => ready(Err(AppError::authentication_required().into())),
        }
    }
}

/// Extractor for admin identities.
/// Returns 401 if the request is anonymous and 403 if the user is not an admin.
#[derive(Debug)]
pub struct AdminUser(pub CurrentUser);

impl FromRequest for AdminUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CurrentUser>() {
            Some(user) if user.is_admin() => {
                ready(Ok(AdminUser(user.clone())))
            }
            Some(user) => {
                tracing::warn!("User {} denied admin access to {}", user.id, req.path());
                ready(Err(AppError::admin_required().into()))
            }
            None => {
                ready(Err(AppError::authentication_required().into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest, ResponseError};

    use super::*;
    use crate::entities::user::Role;

    fn identity(role: Role) -> CurrentUser {
        CurrentUser { id: 1, email: "a@b.c".into(), name: "A".into(), role }
    }

    fn status_of(err: actix_web::Error) -> StatusCode {
        err.as_response_error().status_code()
    }

    #[actix_rt::test]
    async fn anonymous_requests_are_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let err = Authenticated::extract(&req).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::UNAUTHORIZED);

        let err = AdminUser::extract(&req).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn non_admins_are_forbidden_from_admin_routes() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(identity(Role::User));

        assert!(Authenticated::extract(&req).await.is_ok());

        let err = AdminUser::extract(&req).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::FORBIDDEN);
    }

    #[actix_rt::test]
    async fn admins_pass_both_guards() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(identity(Role::Admin));

        let AdminUser(user) = AdminUser::extract(&req).await.unwrap();
        assert_eq!(user, identity(Role::Admin));
    }
}
