use actix_web::{post, web, HttpResponse, Responder, ResponseError};

use crate::entities::user::LoginUser;
use crate::AppState;

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>
) -> impl Responder {
    match state.auth_handler.login(user.into_inner()).await {
        Ok(login_response) => HttpResponse::Ok().json(login_response),
        Err(e) => e.error_response(),
    }
}
