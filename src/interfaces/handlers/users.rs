use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::user::ChangePasswordRequest, errors::AppError, use_cases::extractors::AdminUser, AppState};

#[instrument(skip(admin, state, data), fields(user_id = admin.0.id))]
pub async fn change_password(
    admin: AdminUser,
    state: web::Data<AppState>,
    data: web::Json<ChangePasswordRequest>,
) -> Result<impl Responder, AppError> {
    state.auth_handler
        .change_password(admin.0.id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Password updated successfully"
    })))
}
