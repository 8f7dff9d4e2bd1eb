use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::blog_post::{BlogPost, NewBlogPostRequest, UpdateBlogPostRequest},
    errors::AppError,
    use_cases::extractors::AdminUser,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_published_posts(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let posts = state.blog_handler.list_public().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(_admin, state))]
pub async fn get_all_posts(
    _admin: AdminUser,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let posts = state.blog_handler.list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(state))]
pub async fn get_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_visible(BlogPost::NATURAL_KEY, &slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_admin, state, data))]
pub async fn create_post(
    _admin: AdminUser,
    state: web::Data<AppState>,
    data: web::Json<NewBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.create(data.into_inner()).await?;

    tracing::info!("Created post {} ({})", post.id, post.slug);
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_post(
    _admin: AdminUser,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.update(&post_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_admin, state))]
pub async fn delete_post(
    _admin: AdminUser,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state.blog_handler.delete(&post_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": message })))
}
