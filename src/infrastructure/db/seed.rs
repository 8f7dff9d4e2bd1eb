use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::{
    auth::password::hash_password,
    entities::user::UserInsert,
    errors::AppError,
    repositories::{sqlx_repo::SqlxUserRepo, user::UserRepository},
    settings::AppConfig,
};

struct SampleProject {
    name: &'static str,
    description: &'static str,
    language: &'static str,
    url: &'static str,
    stars: Option<i64>,
    featured: bool,
}

const SAMPLE_PROJECTS: &[SampleProject] = &[
    SampleProject {
        name: "Open TCG Store",
        description: "An open source storefront for trading card game shops.",
        language: "TypeScript",
        url: "https://github.com/jimsimon/open-tcg-store",
        stars: None,
        featured: true,
    },
    SampleProject {
        name: "Portfolio",
        description: "This site: a personal portfolio and blog.",
        language: "TypeScript",
        url: "https://github.com/jimsimon/portfolio",
        stars: None,
        featured: false,
    },
];

/// Seeds the configured admin account and, if enabled, the sample projects.
/// Existing rows are left alone, so this is safe to run on every start.
pub async fn bootstrap(config: &AppConfig, pool: &SqlitePool) -> Result<(), AppError> {
    let users = SqlxUserRepo::new(pool.clone());
    let admin = &config.admin;

    if users.get_user_by_email(&admin.email).await?.is_none() {
        if admin.password.is_empty() {
            tracing::error!("Admin account {} is missing and no admin password is configured", admin.email);
            return Err(AppError::InternalError("Admin password is not configured".into()));
        }
        let password_hash = hash_password(&admin.password)?;
        let created = users
            .create_user_if_absent(&UserInsert::admin(&admin.email, &admin.name, password_hash))
            .await?;
        if created {
            info!("Seeded admin account {}", admin.email);
        }
    }

    if config.seed_sample_projects {
        let inserted = seed_sample_projects(pool).await?;
        if inserted > 0 {
            info!("Seeded {} sample projects", inserted);
        }
    }

    Ok(())
}

async fn seed_sample_projects(pool: &SqlitePool) -> Result<u64, AppError> {
    let mut inserted = 0;

    for project in SAMPLE_PROJECTS {
        let result = sqlx::query(
            r#"INSERT OR IGNORE INTO projects (name, description, language, url, stars, featured, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(project.name)
        .bind(project.description)
        .bind(project.language)
        .bind(project.url)
        .bind(project.stars)
        .bind(project.featured)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    Ok(inserted)
}
