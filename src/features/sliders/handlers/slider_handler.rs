use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::sliders::dtos::{
    CreateSliderDto, ListSlidersQuery, SliderResponseDto, UpdateSliderDto,
};
use crate::features::sliders::services::SliderService;
use crate::shared::types::ApiResponse;

/// List homepage sliders
///
/// Only active sliders are returned unless `includeInactive=true`.
#[utoipa::path(
    get,
    path = "/sliders",
    params(ListSlidersQuery),
    responses(
        (status = 200, description = "Sliders ordered by sort order", body = ApiResponse<Vec<SliderResponseDto>>),
    ),
    tag = "sliders"
)]
pub async fn list_sliders(
    State(service): State<Arc<SliderService>>,
    Query(query): Query<ListSlidersQuery>,
) -> Result<Json<ApiResponse<Vec<SliderResponseDto>>>> {
    let sliders = service.list(query.include_inactive()).await?;
    Ok(Json(ApiResponse::success(Some(sliders), None, None)))
}

/// Get a slider by ID
#[utoipa::path(
    get,
    path = "/sliders/{id}",
    params(
        ("id" = i32, Path, description = "Slider ID")
    ),
    responses(
        (status = 200, description = "Slider found", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Invalid slider ID"),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn get_slider(
    State(service): State<Arc<SliderService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<SliderResponseDto>>> {
    let slider = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(slider), None, None)))
}

/// Create a slider
#[utoipa::path(
    post,
    path = "/sliders",
    request_body = CreateSliderDto,
    responses(
        (status = 201, description = "Slider created", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Validation error (invalid config JSON, sort order in use)")
    ),
    tag = "sliders"
)]
pub async fn create_slider(
    State(service): State<Arc<SliderService>>,
    AppJson(dto): AppJson<CreateSliderDto>,
) -> Result<(StatusCode, Json<ApiResponse<SliderResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let slider = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(slider), None, None)),
    ))
}

/// Update a slider; omitted fields keep their value
#[utoipa::path(
    put,
    path = "/sliders/{id}",
    params(
        ("id" = i32, Path, description = "Slider ID")
    ),
    request_body = UpdateSliderDto,
    responses(
        (status = 200, description = "Slider updated", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn update_slider(
    State(service): State<Arc<SliderService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateSliderDto>,
) -> Result<Json<ApiResponse<SliderResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let slider = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(slider), None, None)))
}

/// Delete a slider
#[utoipa::path(
    delete,
    path = "/sliders/{id}",
    params(
        ("id" = i32, Path, description = "Slider ID")
    ),
    responses(
        (status = 200, description = "Slider deleted", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Invalid slider ID"),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn delete_slider(
    State(service): State<Arc<SliderService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<SliderResponseDto>>> {
    let slider = service.delete(id).await?;
    Ok(Json(ApiResponse::success(Some(slider), None, None)))
}
