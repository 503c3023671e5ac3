use sqlx::{self, postgres::PgRow, FromRow, PgPool};

use crate::database::manager::DatabaseError;
use crate::database::models::Resource;
use crate::types::FavoriteKind;

/// Generic read access to a table whose rows map onto `T`.
pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: Resource + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
        Ok(sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?)
    }

    pub async fn select_by_id(&self, id: i64) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
        Ok(sqlx::query_as::<_, T>(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    /// `column` is always a compile-time identifier, never client input
    pub async fn select_by(&self, column: &'static str, value: &str) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE {} = $1 LIMIT 1", T::TABLE, column);
        Ok(sqlx::query_as::<_, T>(&sql).bind(value).fetch_optional(&self.pool).await?)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DatabaseError> {
        let sql = format!("SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)", T::TABLE);
        let (found,): (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(found)
    }

    /// Rows linked to a favorites row through the join table of `kind`
    pub async fn select_favorited(&self, kind: FavoriteKind, favorite_id: i64) -> Result<Vec<T>, DatabaseError> {
        let sql = format!(
            "SELECT t.* FROM {table} t JOIN {join} j ON j.{column} = t.id WHERE j.favorite_id = $1 ORDER BY t.id",
            table = T::TABLE,
            join = kind.join_table(),
            column = kind.item_column(),
        );
        Ok(sqlx::query_as::<_, T>(&sql).bind(favorite_id).fetch_all(&self.pool).await?)
    }
}
