use std::marker::PhantomData;

use validator::Validate;

use crate::{
    entities::resource::{Resource, NEWEST_FIRST},
    errors::AppError,
    repositories::content::ContentRepository,
    utils::valid_id::valid_id,
};

/// CRUD conventions shared by every content resource.
///
/// Store failures on writes are reported as `400 Failed to <verb> <noun>` and the
/// cause is logged; a missing or non-numeric id is always `404 <Label> not found`.
pub struct ContentHandler<R, Repo>
where
    R: Resource,
    Repo: ContentRepository<R>,
{
    pub repo: Repo,
    _resource: PhantomData<fn() -> R>,
}

impl<R, Repo> ContentHandler<R, Repo>
where
    R: Resource,
    Repo: ContentRepository<R>,
{
    pub fn new(repo: Repo) -> Self {
        ContentHandler {
            repo,
            _resource: PhantomData,
        }
    }

    /// Rows visible to anonymous callers
    pub async fn list_public(&self) -> Result<Vec<R::Row>, AppError> {
        self.repo.list(R::PUBLIC_FLAG, R::ORDER_BY).await
    }

    /// Every row, for the admin console
    pub async fn list_all(&self) -> Result<Vec<R::Row>, AppError> {
        self.repo.list(None, R::ORDER_BY).await
    }

    /// Rows with `flag` set, newest first
    pub async fn list_flagged(&self, flag: &'static str) -> Result<Vec<R::Row>, AppError> {
        self.repo.list(Some(flag), NEWEST_FIRST).await
    }

    /// Looks a row up by a unique column. Rows hidden from the public read as missing.
    pub async fn get_visible(&self, column: &'static str, key: &str) -> Result<R::Row, AppError> {
        self.repo
            .get_by_column(column, key)
            .await?
            .filter(R::is_public)
            .ok_or_else(|| AppError::NotFound(R::not_found()))
    }

    pub async fn create(&self, request: R::Create) -> Result<R::Row, AppError> {
        if request.validate().is_err() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        self.repo.create(request).await.map_err(|e| {
            tracing::warn!("Failed to create {}: {}", R::NOUN, e);
            AppError::BadRequest(format!("Failed to create {}", R::NOUN))
        })
    }

    pub async fn update(&self, id: &str, request: R::Update) -> Result<R::Row, AppError> {
        let id = valid_id(id).ok_or_else(|| AppError::NotFound(R::not_found()))?;

        match self.repo.update(id, request).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(AppError::NotFound(R::not_found())),
            Err(e) => {
                tracing::warn!("Failed to update {} {}: {}", R::NOUN, id, e);
                Err(AppError::BadRequest(format!("Failed to update {}", R::NOUN)))
            }
        }
    }

    /// Returns the confirmation message sent back to the caller.
    pub async fn delete(&self, id: &str) -> Result<String, AppError> {
        let id = valid_id(id).ok_or_else(|| AppError::NotFound(R::not_found()))?;

        match self.repo.delete(id).await {
            Ok(true) => Ok(R::deleted()),
            Ok(false) => Err(AppError::NotFound(R::not_found())),
            Err(e) => {
                tracing::warn!("Failed to delete {} {}: {}", R::NOUN, id, e);
                Err(AppError::BadRequest(format!("Failed to delete {}", R::NOUN)))
            }
        }
    }
}
