use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};

use crate::{
    entities::resource::{Columns, Resource},
    errors::AppError,
    repositories::sqlx_repo::SqlxContentRepo,
};

#[async_trait]
pub trait ContentRepository<R: Resource>: Send + Sync {
    /// Rows whose `flag` column is true (all rows when `None`), in `order_by` order.
    async fn list(&self, flag: Option<&'static str>, order_by: &'static str) -> Result<Vec<R::Row>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<R::Row>, AppError>;
    async fn get_by_column(&self, column: &'static str, value: &str) -> Result<Option<R::Row>, AppError>;
    async fn create(&self, create: R::Create) -> Result<R::Row, AppError>;
    /// `Ok(None)` when no row has the id.
    async fn update(&self, id: i64, update: R::Update) -> Result<Option<R::Row>, AppError>;
    /// Returns whether a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

fn insert_query(table: &str, columns: Columns) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!("INSERT INTO {table} ("));

    let names = columns.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ");
    builder.push(names).push(") VALUES (");

    for (i, (_, value)) in columns.into_iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        value.bind(&mut builder);
    }

    builder.push(") RETURNING *");
    builder
}

fn update_query(table: &str, id: i64, columns: Columns) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!("UPDATE {table} SET "));

    for (i, (name, value)) in columns.into_iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        builder.push(name).push(" = ");
        value.bind(&mut builder);
    }

    builder.push(" WHERE id = ").push_bind(id);
    builder.push(" RETURNING *");
    builder
}

#[async_trait]
impl<R: Resource> ContentRepository<R> for SqlxContentRepo<R> {
    async fn list(&self, flag: Option<&'static str>, order_by: &'static str) -> Result<Vec<R::Row>, AppError> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT * FROM {}", R::TABLE));

        if let Some(flag) = flag {
            builder.push(format!(" WHERE {flag} = TRUE"));
        }

        builder.push(format!(" ORDER BY {order_by}"));

        let rows = builder
            .build_query_as::<R::Row>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<R::Row>, AppError> {
        let row = sqlx::query_as::<_, R::Row>(&format!("SELECT * FROM {} WHERE id = ?", R::TABLE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn get_by_column(&self, column: &'static str, value: &str) -> Result<Option<R::Row>, AppError> {
        let row = sqlx::query_as::<_, R::Row>(&format!("SELECT * FROM {} WHERE {column} = ? LIMIT 1", R::TABLE))
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn create(&self, create: R::Create) -> Result<R::Row, AppError> {
        let columns = R::insert_columns(create, Utc::now());
        let mut builder = insert_query(R::TABLE, columns);

        let row = builder
            .build_query_as::<R::Row>()
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, update: R::Update) -> Result<Option<R::Row>, AppError> {
        let columns = R::update_columns(update, Utc::now());

        if columns.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut builder = update_query(R::TABLE, id, columns);

        let row = builder
            .build_query_as::<R::Row>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", R::TABLE))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
