use actix_web::{get, web, HttpResponse, Responder};

use crate::{constants::APP_VERSION, AppState};

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome to the {} API!", state.app_name),
        "name": state.app_name,
        "status": "Ok",
        "version": APP_VERSION,
    }))
}
