use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{
    option_fields::OptionField,
    resource::{required_text, ColumnValue, Columns, Resource},
};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub language: String,
    pub url: String,
    pub stars: Option<i64>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub const FEATURED_FLAG: &'static str = "featured";
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub description: Option<String>,

    #[validate(required, length(min = 1))]
    pub language: Option<String>,

    #[validate(required, length(min = 1))]
    pub url: Option<String>,

    #[serde(default)]
    pub stars: Option<i64>,

    #[serde(default)]
    pub featured: Option<bool>,
}

/// `stars` distinguishes an explicit `null` (clear the count) from an absent key.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub url: Option<String>,
    pub stars: OptionField<i64>,
    pub featured: Option<bool>,
}

impl Resource for Project {
    type Row = Project;
    type Create = NewProjectRequest;
    type Update = UpdateProjectRequest;

    const TABLE: &'static str = "projects";
    const LABEL: &'static str = "Project";
    const NOUN: &'static str = "project";
    const PUBLIC_FLAG: Option<&'static str> = None;
    const ORDER_BY: &'static str = "featured DESC, created_at DESC, id DESC";

    fn is_public(_row: &Project) -> bool {
        true
    }

    fn insert_columns(create: NewProjectRequest, now: DateTime<Utc>) -> Columns {
        vec![
            ("name", required_text(create.name)),
            ("description", required_text(create.description)),
            ("language", required_text(create.language)),
            ("url", required_text(create.url)),
            ("stars", ColumnValue::OptionalInt(create.stars)),
            ("featured", ColumnValue::Bool(create.featured.unwrap_or(false))),
            ("created_at", ColumnValue::Timestamp(now)),
        ]
    }

    fn update_columns(update: UpdateProjectRequest, _now: DateTime<Utc>) -> Columns {
        let mut columns = Columns::new();

        if let Some(name) = update.name {
            columns.push(("name", ColumnValue::Text(name)));
        }
        if let Some(description) = update.description {
            columns.push(("description", ColumnValue::Text(description)));
        }
        if let Some(language) = update.language {
            columns.push(("language", ColumnValue::Text(language)));
        }
        if let Some(url) = update.url {
            columns.push(("url", ColumnValue::Text(url)));
        }
        if let Some(stars) = update.stars.into_option() {
            columns.push(("stars", ColumnValue::OptionalInt(stars)));
        }
        if let Some(featured) = update.featured {
            columns.push(("featured", ColumnValue::Bool(featured)));
        }

        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name_description_language_and_url() {
        let partial: NewProjectRequest = serde_json::from_str(
            r#"{"name":"P","description":"D","language":"Rust"}"#
        ).unwrap();
        assert!(partial.validate().is_err());

        let full: NewProjectRequest = serde_json::from_str(
            r#"{"name":"P","description":"D","language":"Rust","url":"https://example.com/p"}"#
        ).unwrap();
        assert!(full.validate().is_ok());
    }

    #[test]
    fn insert_defaults_featured_false_and_stars_null() {
        let now = Utc::now();
        let request: NewProjectRequest = serde_json::from_str(
            r#"{"name":"P","description":"D","language":"Rust","url":"https://example.com/p"}"#
        ).unwrap();

        let columns = Project::insert_columns(request, now);
        assert!(columns.contains(&("featured", ColumnValue::Bool(false))));
        assert!(columns.contains(&("stars", ColumnValue::OptionalInt(None))));
    }

    #[test]
    fn update_can_clear_stars() {
        let now = Utc::now();

        let untouched: UpdateProjectRequest = serde_json::from_str(r#"{"featured":true}"#).unwrap();
        assert_eq!(
            Project::update_columns(untouched, now),
            vec![("featured", ColumnValue::Bool(true))]
        );

        let cleared: UpdateProjectRequest = serde_json::from_str(r#"{"stars":null}"#).unwrap();
        assert_eq!(
            Project::update_columns(cleared, now),
            vec![("stars", ColumnValue::OptionalInt(None))]
        );

        assert!(Project::update_columns(UpdateProjectRequest::default(), now).is_empty());
    }
}
