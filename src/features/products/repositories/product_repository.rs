use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::StoreResult;
use crate::features::products::models::Product;

/// Read-only data access for products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// First `limit` products ordered by id
    async fn list(&self, limit: i64) -> StoreResult<Vec<Product>>;
}

/// PostgreSQL-backed repository implementation.
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self, limit: i64) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, price
            FROM products
            ORDER BY id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
