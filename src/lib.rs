mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, password, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, telemetry, utils, web};

use auth::jwt::JwtService;
use entities::{blog_post::BlogPost, project::Project};
use repositories::sqlx_repo::{SqlxContentRepo, SqlxUserRepo};
use settings::{AppConfig, Profile};
use use_cases::{auth::{AuthHandler, DevLogin}, content::ContentHandler};

pub struct AppState {
    pub app_name: String,
    pub auth_handler: AppAuthHandler,
    pub blog_handler: BlogHandler,
    pub project_handler: ProjectHandler,
    pub profile: Profile,
}

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;
pub type BlogHandler = ContentHandler<BlogPost, SqlxContentRepo<BlogPost>>;
pub type ProjectHandler = ContentHandler<Project, SqlxContentRepo<Project>>;

impl AppState {
    pub fn new(config: &AppConfig, pool: sqlx::SqlitePool) -> Self {
        let dev_login = config.effective_dev_token().map(|token| {
            tracing::warn!("Development token enabled for {}", config.admin.email);
            DevLogin {
                token: token.to_string(),
                email: config.admin.email.clone(),
            }
        });

        let auth_handler = AuthHandler::new(SqlxUserRepo::new(pool.clone()), JwtService::new(config))
            .with_dev_login(dev_login);

        AppState {
            app_name: config.name.clone(),
            auth_handler,
            blog_handler: ContentHandler::new(SqlxContentRepo::new(pool.clone())),
            project_handler: ContentHandler::new(SqlxContentRepo::new(pool)),
            profile: config.profile.clone(),
        }
    }
}
