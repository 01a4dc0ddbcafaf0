use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::StoreResult;
use crate::features::sliders::models::{NewSlider, Slider};

/// Data access for homepage sliders
#[async_trait]
pub trait SliderRepository: Send + Sync {
    /// Sliders ordered by sort order; inactive ones only when requested
    async fn list(&self, include_inactive: bool) -> StoreResult<Vec<Slider>>;
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Slider>>;
    async fn find_by_sort_order(&self, sort_order: i32) -> StoreResult<Option<Slider>>;
    /// Highest sort order in use, `None` when there are no sliders
    async fn max_sort_order(&self) -> StoreResult<Option<i32>>;
    async fn insert(&self, slider: NewSlider) -> StoreResult<Slider>;
    /// Persist every editable field of an already merged slider
    async fn update(&self, slider: &Slider) -> StoreResult<Option<Slider>>;
    async fn delete(&self, id: i32) -> StoreResult<Option<Slider>>;
}

/// PostgreSQL-backed repository implementation.
pub struct PgSliderRepository {
    pool: PgPool,
}

impl PgSliderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SliderRepository for PgSliderRepository {
    async fn list(&self, include_inactive: bool) -> StoreResult<Vec<Slider>> {
        let sliders = sqlx::query_as::<_, Slider>(
            r#"
            SELECT id, title, eyebrow, subtitle, alt, image, href, config,
                   sort_order, active, created_at, updated_at
            FROM sliders
            WHERE $1 OR active = TRUE
            ORDER BY sort_order ASC
            "#,
        )
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await?;

        Ok(sliders)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Slider>> {
        let slider = sqlx::query_as::<_, Slider>(
            r#"
            SELECT id, title, eyebrow, subtitle, alt, image, href, config,
                   sort_order, active, created_at, updated_at
            FROM sliders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(slider)
    }

    async fn find_by_sort_order(&self, sort_order: i32) -> StoreResult<Option<Slider>> {
        let slider = sqlx::query_as::<_, Slider>(
            r#"
            SELECT id, title, eyebrow, subtitle, alt, image, href, config,
                   sort_order, active, created_at, updated_at
            FROM sliders
            WHERE sort_order = $1
            "#,
        )
        .bind(sort_order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(slider)
    }

    async fn max_sort_order(&self) -> StoreResult<Option<i32>> {
        let max = sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(sort_order) FROM sliders")
            .fetch_one(&self.pool)
            .await?;

        Ok(max)
    }

    async fn insert(&self, slider: NewSlider) -> StoreResult<Slider> {
        let created = sqlx::query_as::<_, Slider>(
            r#"
            INSERT INTO sliders (title, eyebrow, subtitle, alt, image, href, config, sort_order, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, eyebrow, subtitle, alt, image, href, config,
                      sort_order, active, created_at, updated_at
            "#,
        )
        .bind(&slider.title)
        .bind(&slider.eyebrow)
        .bind(&slider.subtitle)
        .bind(&slider.alt)
        .bind(&slider.image)
        .bind(&slider.href)
        .bind(&slider.config)
        .bind(slider.sort_order)
        .bind(slider.active)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, slider: &Slider) -> StoreResult<Option<Slider>> {
        let updated = sqlx::query_as::<_, Slider>(
            r#"
            UPDATE sliders
            SET title = $1, eyebrow = $2, subtitle = $3, alt = $4, image = $5, href = $6,
                config = $7, sort_order = $8, active = $9, updated_at = NOW()
            WHERE id = $10
            RETURNING id, title, eyebrow, subtitle, alt, image, href, config,
                      sort_order, active, created_at, updated_at
            "#,
        )
        .bind(&slider.title)
        .bind(&slider.eyebrow)
        .bind(&slider.subtitle)
        .bind(&slider.alt)
        .bind(&slider.image)
        .bind(&slider.href)
        .bind(&slider.config)
        .bind(slider.sort_order)
        .bind(slider.active)
        .bind(slider.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> StoreResult<Option<Slider>> {
        let deleted = sqlx::query_as::<_, Slider>(
            r#"
            DELETE FROM sliders
            WHERE id = $1
            RETURNING id, title, eyebrow, subtitle, alt, image, href, config,
                      sort_order, active, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted)
    }
}
