use std::sync::Arc;

use crate::core::database::StoreError;
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryHierarchyDto, CategoryResponseDto, CreateCategoryDto, TopLevelCategoryDto,
    UpdateCategoryDto,
};
use crate::features::categories::models::CategoryPatch;
use crate::features::categories::repositories::CategoryRepository;
use crate::shared::constants::MAX_TOP_LEVEL_CATEGORIES;

const SUBCATEGORIES_BLOCK_DELETE: &str = "Cannot delete category with subcategories";
const PRODUCTS_BLOCK_DELETE: &str = "Cannot delete category with associated products";

/// Convert store errors raised by category writes into client-facing errors
fn handle_write_error(e: StoreError, slug: &str) -> AppError {
    match e {
        StoreError::UniqueViolation { ref field } if field == "slug" => {
            AppError::Validation(format!("Slug '{}' already exists", slug))
        }
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint == "categories_parent_id_fkey" =>
        {
            AppError::Validation("Parent category does not exist".to_string())
        }
        other => {
            tracing::error!("Failed to write category: {:?}", other);
            AppError::Database(other)
        }
    }
}

/// A delete can still trip a foreign key when a child or product was added
/// after the dependency check.
fn handle_delete_error(e: StoreError) -> AppError {
    match e {
        StoreError::ForeignKeyViolation { ref constraint } if constraint.starts_with("products_") => {
            AppError::Validation(PRODUCTS_BLOCK_DELETE.to_string())
        }
        StoreError::ForeignKeyViolation { .. } => {
            AppError::Validation(SUBCATEGORIES_BLOCK_DELETE.to_string())
        }
        other => {
            tracing::error!("Failed to delete category: {:?}", other);
            AppError::Database(other)
        }
    }
}

/// Service for the category tree
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// List top-level categories with their immediate children
    pub async fn list_top_level(&self) -> Result<Vec<TopLevelCategoryDto>> {
        let categories = self.repo.list_all().await?;
        Ok(TopLevelCategoryDto::from_flat(&categories))
    }

    /// List every category with its parent id and immediate children
    pub async fn list_hierarchy(&self) -> Result<Vec<CategoryHierarchyDto>> {
        let categories = self.repo.list_all().await?;
        Ok(CategoryHierarchyDto::from_flat(&categories))
    }

    /// Create a category, enforcing the top-level limit
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        if dto.parent_id.is_none() {
            let top_level = self.repo.count_top_level().await?;
            if top_level >= MAX_TOP_LEVEL_CATEGORIES {
                return Err(AppError::Validation(format!(
                    "Maximum top-level categories exceeded (limit is {})",
                    MAX_TOP_LEVEL_CATEGORIES
                )));
            }
        }

        let slug = dto.slug.clone();
        let category = self
            .repo
            .insert(dto.into())
            .await
            .map_err(|e| handle_write_error(e, &slug))?;

        tracing::info!(
            "Category created: id={}, slug={}, parent_id={:?}",
            category.id,
            category.slug,
            category.parent_id
        );

        Ok(category.into())
    }

    /// Update name, slug or image of a category
    pub async fn update(&self, id: i32, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

        let merged = CategoryPatch::from(dto).apply(existing);

        let category = self
            .repo
            .update(&merged)
            .await
            .map_err(|e| handle_write_error(e, &merged.slug))?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

        tracing::info!("Category updated: id={}, slug={}", category.id, category.slug);

        Ok(category.into())
    }

    /// Delete a category that has no subcategories and no products
    pub async fn delete(&self, id: i32) -> Result<CategoryResponseDto> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }

        if self.repo.count_children(id).await? > 0 {
            return Err(AppError::Validation(SUBCATEGORIES_BLOCK_DELETE.to_string()));
        }

        if self.repo.count_products(id).await? > 0 {
            return Err(AppError::Validation(PRODUCTS_BLOCK_DELETE.to_string()));
        }

        let category = self
            .repo
            .delete(id)
            .await
            .map_err(handle_delete_error)?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

        tracing::info!("Category deleted: id={}, slug={}", category.id, category.slug);

        Ok(category.into())
    }
}
