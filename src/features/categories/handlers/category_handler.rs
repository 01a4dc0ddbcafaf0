use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::categories::dtos::{
    CategoryHierarchyDto, CategoryResponseDto, CreateCategoryDto, TopLevelCategoryDto,
    UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List top-level categories
///
/// Each entry carries its immediate children (id, name, slug).
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Top-level categories", body = ApiResponse<Vec<TopLevelCategoryDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<TopLevelCategoryDto>>>> {
    let categories = service.list_top_level().await?;
    Ok(Json(ApiResponse::success(Some(categories), None, None)))
}

/// List every category with its parent and children
#[utoipa::path(
    get,
    path = "/categories/all",
    responses(
        (status = 200, description = "Full category hierarchy", body = ApiResponse<Vec<CategoryHierarchyDto>>),
    ),
    tag = "categories"
)]
pub async fn list_all_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryHierarchyDto>>>> {
    let categories = service.list_hierarchy().await?;
    Ok(Json(ApiResponse::success(Some(categories), None, None)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error (top-level limit, duplicate slug, unknown parent)")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category), None, None)),
    ))
}

/// Update a category's name, slug or image
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Delete a category without subcategories or products
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Category still has subcategories or products"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.delete(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}
