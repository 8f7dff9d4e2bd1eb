use std::marker::PhantomData;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: SqlitePool,
}

/// One repository type serves every [`Resource`](crate::entities::resource::Resource);
/// the type parameter only selects the table and row mapping.
pub struct SqlxContentRepo<R> {
    pub pool: SqlitePool,
    _resource: PhantomData<fn() -> R>,
}

impl<R> SqlxContentRepo<R> {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxContentRepo {
            pool,
            _resource: PhantomData,
        }
    }
}

impl<R> Clone for SqlxContentRepo<R> {
    fn clone(&self) -> Self {
        SqlxContentRepo::new(self.pool.clone())
    }
}
