//! In-memory repositories for service and router tests.
//!
//! Enforces the same unique and foreign key constraints as the migrations so
//! services see identical `StoreError`s.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::core::database::{StoreError, StoreResult};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::products::models::Product;
use crate::features::products::repositories::ProductRepository;
use crate::features::sliders::models::{NewSlider, Slider};
use crate::features::sliders::repositories::SliderRepository;

struct StoredProduct {
    product: Product,
    category_id: i32,
}

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    products: Vec<StoredProduct>,
    sliders: Vec<Slider>,
    last_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn slug_taken(&self, slug: &str, except: Option<i32>) -> bool {
        self.categories
            .iter()
            .any(|c| c.slug == slug && Some(c.id) != except)
    }

    fn sort_order_taken(&self, sort_order: i32, except: Option<i32>) -> bool {
        self.sliders
            .iter()
            .any(|s| s.sort_order == sort_order && Some(s.id) != except)
    }
}

fn unique(field: &str) -> StoreError {
    StoreError::UniqueViolation {
        field: field.to_string(),
    }
}

fn foreign_key(constraint: &str) -> StoreError {
    StoreError::ForeignKeyViolation {
        constraint: constraint.to_string(),
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_product(&self, name: &str, slug: &str, category_id: i32) -> Product {
        let mut tables = self.tables.write().await;
        let product = Product {
            id: tables.next_id(),
            name: name.to_string(),
            slug: slug.to_string(),
            price: Decimal::new(2999, 2),
        };
        tables.products.push(StoredProduct {
            product: product.clone(),
            category_id,
        });
        product
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn count_top_level(&self) -> StoreResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().filter(|c| c.is_top_level()).count() as i64)
    }

    async fn count_children(&self, id: i32) -> StoreResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .filter(|c| c.parent_id == Some(id))
            .count() as i64)
    }

    async fn count_products(&self, id: i32) -> StoreResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .iter()
            .filter(|p| p.category_id == id)
            .count() as i64)
    }

    async fn insert(&self, category: NewCategory) -> StoreResult<Category> {
        let mut tables = self.tables.write().await;
        if tables.slug_taken(&category.slug, None) {
            return Err(unique("slug"));
        }
        if let Some(parent_id) = category.parent_id {
            if !tables.categories.iter().any(|c| c.id == parent_id) {
                return Err(foreign_key("categories_parent_id_fkey"));
            }
        }

        let now = Utc::now();
        let created = Category {
            id: tables.next_id(),
            parent_id: category.parent_id,
            name: category.name,
            slug: category.slug,
            image: category.image,
            created_at: now,
            updated_at: now,
        };
        tables.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> StoreResult<Option<Category>> {
        let mut tables = self.tables.write().await;
        if tables.slug_taken(&category.slug, Some(category.id)) {
            return Err(unique("slug"));
        }

        let Some(stored) = tables.categories.iter_mut().find(|c| c.id == category.id) else {
            return Ok(None);
        };
        stored.name = category.name.clone();
        stored.slug = category.slug.clone();
        stored.image = category.image.clone();
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i32) -> StoreResult<Option<Category>> {
        let mut tables = self.tables.write().await;
        if tables.categories.iter().any(|c| c.parent_id == Some(id)) {
            return Err(foreign_key("categories_parent_id_fkey"));
        }
        if tables.products.iter().any(|p| p.category_id == id) {
            return Err(foreign_key("products_category_id_fkey"));
        }

        let position = tables.categories.iter().position(|c| c.id == id);
        Ok(position.map(|i| tables.categories.remove(i)))
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn list(&self, limit: i64) -> StoreResult<Vec<Product>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .iter()
            .take(limit.max(0) as usize)
            .map(|p| p.product.clone())
            .collect())
    }
}

#[async_trait]
impl SliderRepository for InMemoryStore {
    async fn list(&self, include_inactive: bool) -> StoreResult<Vec<Slider>> {
        let tables = self.tables.read().await;
        let mut sliders: Vec<Slider> = tables
            .sliders
            .iter()
            .filter(|s| include_inactive || s.active)
            .cloned()
            .collect();
        sliders.sort_by_key(|s| s.sort_order);
        Ok(sliders)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Slider>> {
        let tables = self.tables.read().await;
        Ok(tables.sliders.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_sort_order(&self, sort_order: i32) -> StoreResult<Option<Slider>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sliders
            .iter()
            .find(|s| s.sort_order == sort_order)
            .cloned())
    }

    async fn max_sort_order(&self) -> StoreResult<Option<i32>> {
        let tables = self.tables.read().await;
        Ok(tables.sliders.iter().map(|s| s.sort_order).max())
    }

    async fn insert(&self, slider: NewSlider) -> StoreResult<Slider> {
        let mut tables = self.tables.write().await;
        if tables.sort_order_taken(slider.sort_order, None) {
            return Err(unique("sort_order"));
        }

        let now = Utc::now();
        let created = Slider {
            id: tables.next_id(),
            title: slider.title,
            eyebrow: slider.eyebrow,
            subtitle: slider.subtitle,
            alt: slider.alt,
            image: slider.image,
            href: slider.href,
            config: slider.config,
            sort_order: slider.sort_order,
            active: slider.active,
            created_at: now,
            updated_at: now,
        };
        tables.sliders.push(created.clone());
        Ok(created)
    }

    async fn update(&self, slider: &Slider) -> StoreResult<Option<Slider>> {
        let mut tables = self.tables.write().await;
        if tables.sort_order_taken(slider.sort_order, Some(slider.id)) {
            return Err(unique("sort_order"));
        }

        let Some(stored) = tables.sliders.iter_mut().find(|s| s.id == slider.id) else {
            return Ok(None);
        };
        *stored = Slider {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..slider.clone()
        };
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i32) -> StoreResult<Option<Slider>> {
        let mut tables = self.tables.write().await;
        let position = tables.sliders.iter().position(|s| s.id == id);
        Ok(position.map(|i| tables.sliders.remove(i)))
    }
}
