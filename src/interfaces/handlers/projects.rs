use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    use_cases::extractors::AdminUser,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_public().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_featured_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler
        .list_flagged(Project::FEATURED_FLAG)
        .await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(_admin, state))]
pub async fn get_all_projects(
    _admin: AdminUser,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_all().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(_admin, state, data))]
pub async fn create_project(
    _admin: AdminUser,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.create(data.into_inner()).await?;

    tracing::info!("Created project {} ({})", project.id, project.url);
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_project(
    _admin: AdminUser,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.update(&project_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_admin, state))]
pub async fn delete_project(
    _admin: AdminUser,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state.project_handler.delete(&project_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": message })))
}
