use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::resource::{required_text, ColumnValue, Columns, Resource};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Unique column public lookups go through.
    pub const NATURAL_KEY: &'static str = "slug";
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub content: Option<String>,

    #[validate(required, length(min = 1))]
    pub excerpt: Option<String>,

    #[validate(required, length(min = 1))]
    pub slug: Option<String>,

    #[serde(default)]
    pub published: Option<bool>,
}

/// Absent or null fields are left as they are.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub published: Option<bool>,
}

impl Resource for BlogPost {
    type Row = BlogPost;
    type Create = NewBlogPostRequest;
    type Update = UpdateBlogPostRequest;

    const TABLE: &'static str = "blog_posts";
    const LABEL: &'static str = "Post";
    const NOUN: &'static str = "post";
    const PUBLIC_FLAG: Option<&'static str> = Some("published");
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn is_public(row: &BlogPost) -> bool {
        row.published
    }

    fn insert_columns(create: NewBlogPostRequest, now: DateTime<Utc>) -> Columns {
        vec![
            ("title", required_text(create.title)),
            ("content", required_text(create.content)),
            ("excerpt", required_text(create.excerpt)),
            (Self::NATURAL_KEY, required_text(create.slug)),
            ("published", ColumnValue::Bool(create.published.unwrap_or(false))),
            ("created_at", ColumnValue::Timestamp(now)),
            ("updated_at", ColumnValue::Timestamp(now)),
        ]
    }

    fn update_columns(update: UpdateBlogPostRequest, now: DateTime<Utc>) -> Columns {
        let mut columns = Columns::new();

        if let Some(title) = update.title {
            columns.push(("title", ColumnValue::Text(title)));
        }
        if let Some(content) = update.content {
            columns.push(("content", ColumnValue::Text(content)));
        }
        if let Some(excerpt) = update.excerpt {
            columns.push(("excerpt", ColumnValue::Text(excerpt)));
        }
        if let Some(slug) = update.slug {
            columns.push((Self::NATURAL_KEY, ColumnValue::Text(slug)));
        }
        if let Some(published) = update.published {
            columns.push(("published", ColumnValue::Bool(published)));
        }

        columns.push(("updated_at", ColumnValue::Timestamp(now)));
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> NewBlogPostRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn create_requires_title_content_excerpt_and_slug() {
        assert!(parse(r#"{"title":"T"}"#).validate().is_err());
        assert!(parse(r#"{"title":"T","content":"C","excerpt":"E","slug":""}"#).validate().is_err());
        assert!(parse(r#"{"title":"T","content":"C","excerpt":"E","slug":"t-1"}"#).validate().is_ok());
    }

    #[test]
    fn insert_defaults_to_unpublished() {
        let now = Utc::now();
        let columns = BlogPost::insert_columns(
            parse(r#"{"title":"T","content":"C","excerpt":"E","slug":"t-1"}"#),
            now,
        );

        assert!(columns.contains(&("published", ColumnValue::Bool(false))));
        assert!(columns.contains(&("created_at", ColumnValue::Timestamp(now))));
        assert!(columns.contains(&("updated_at", ColumnValue::Timestamp(now))));
    }

    #[test]
    fn update_always_stamps_updated_at() {
        let now = Utc::now();
        let columns = BlogPost::update_columns(UpdateBlogPostRequest::default(), now);
        assert_eq!(columns, vec![("updated_at", ColumnValue::Timestamp(now))]);

        let patch: UpdateBlogPostRequest = serde_json::from_str(r#"{"published":true,"title":null}"#).unwrap();
        let columns = BlogPost::update_columns(patch, now);
        assert_eq!(columns, vec![
            ("published", ColumnValue::Bool(true)),
            ("updated_at", ColumnValue::Timestamp(now)),
        ]);
    }

    #[test]
    fn serializes_camel_case_timestamps() {
        let now = Utc::now();
        let post = BlogPost {
            id: 1,
            title: "T".into(),
            content: "C".into(),
            excerpt: "E".into(),
            slug: "t-1".into(),
            published: true,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
