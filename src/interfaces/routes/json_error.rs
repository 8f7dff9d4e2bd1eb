use actix_web::web;

use crate::errors::AppError;

/// Malformed or mistyped JSON bodies answer with the usual `{"error": ...}` shape.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, req| {
        tracing::debug!("Rejected JSON body on {}: {}", req.path(), err);
        AppError::BadRequest(format!("Invalid JSON payload: {}", err)).into()
    }));
}
