pub mod content;
pub mod sqlx_repo;
pub mod token;
pub mod user;
