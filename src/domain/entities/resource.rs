//! Describes a content table to the generic CRUD layer.
//!
//! A [`Resource`] names its table, how rows are ordered, which boolean column (if any)
//! gates public visibility, and how request payloads map onto columns. The repository
//! in `repositories::content` and the handler in `use_cases::content` are written once
//! against this trait and instantiated for blog posts and projects.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, QueryBuilder, Sqlite};
use validator::Validate;

/// Ordering used by flag-filtered listings such as featured projects.
pub const NEWEST_FIRST: &str = "created_at DESC, id DESC";

/// A value bound into an INSERT or UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    Bool(bool),
    OptionalInt(Option<i64>),
    Timestamp(DateTime<Utc>),
}

impl ColumnValue {
    pub fn bind(self, builder: &mut QueryBuilder<'_, Sqlite>) {
        match self {
            ColumnValue::Text(v) => builder.push_bind(v),
            ColumnValue::Bool(v) => builder.push_bind(v),
            ColumnValue::OptionalInt(v) => builder.push_bind(v),
            ColumnValue::Timestamp(v) => builder.push_bind(v),
        };
    }
}

pub type Columns = Vec<(&'static str, ColumnValue)>;

pub trait Resource: Send + Sync + 'static {
    type Row: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Unpin + 'static;
    /// Create payload; `validate()` failing means a required field is missing.
    type Create: Validate + DeserializeOwned + Send + 'static;
    type Update: DeserializeOwned + Send + 'static;

    const TABLE: &'static str;
    /// Capitalized noun used in responses, e.g. "Post not found".
    const LABEL: &'static str;
    /// Lowercase noun used in failures, e.g. "Failed to create post".
    const NOUN: &'static str;
    /// Boolean column a row must have set to appear in public listings.
    const PUBLIC_FLAG: Option<&'static str>;
    const ORDER_BY: &'static str;

    fn is_public(row: &Self::Row) -> bool;

    /// Columns for a validated create payload, including defaults and timestamps.
    fn insert_columns(create: Self::Create, now: DateTime<Utc>) -> Columns;

    /// Columns touched by a partial update. May be empty.
    fn update_columns(update: Self::Update, now: DateTime<Utc>) -> Columns;

    fn not_found() -> String {
        format!("{} not found", Self::LABEL)
    }

    fn deleted() -> String {
        format!("{} deleted successfully", Self::LABEL)
    }
}

/// Unwraps a field that `Validate` has already proven present.
pub(crate) fn required_text(value: Option<String>) -> ColumnValue {
    ColumnValue::Text(value.unwrap_or_default())
}
