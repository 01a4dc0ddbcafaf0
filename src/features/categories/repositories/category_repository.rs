use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::StoreResult;
use crate::features::categories::models::{Category, NewCategory};

/// Data access for the category tree
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, ordered by id ascending
    async fn list_all(&self) -> StoreResult<Vec<Category>>;
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Category>>;
    async fn count_top_level(&self) -> StoreResult<i64>;
    async fn count_children(&self, id: i32) -> StoreResult<i64>;
    async fn count_products(&self, id: i32) -> StoreResult<i64>;
    async fn insert(&self, category: NewCategory) -> StoreResult<Category>;
    /// Persist name, slug and image of an already merged category
    async fn update(&self, category: &Category) -> StoreResult<Option<Category>>;
    async fn delete(&self, id: i32) -> StoreResult<Option<Category>>;
}

/// PostgreSQL-backed repository implementation.
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_all(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, image, created_at, updated_at
            FROM categories
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, image, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn count_top_level(&self) -> StoreResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories WHERE parent_id IS NULL")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn count_children(&self, id: i32) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories WHERE parent_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_products(&self, id: i32) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE category_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert(&self, category: NewCategory) -> StoreResult<Category> {
        let created = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, image, parent_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, parent_id, name, slug, image, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.image)
        .bind(category.parent_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, category: &Category) -> StoreResult<Option<Category>> {
        let updated = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1, slug = $2, image = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, parent_id, name, slug, image, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.image)
        .bind(category.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> StoreResult<Option<Category>> {
        let deleted = sqlx::query_as::<_, Category>(
            r#"
            DELETE FROM categories
            WHERE id = $1
            RETURNING id, parent_id, name, slug, image, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted)
    }
}
