use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::products::dtos::ProductSummaryDto;
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, Meta};

/// List products
///
/// Returns up to 20 products with id, name, slug and price.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductSummaryDto>>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<ApiResponse<Vec<ProductSummaryDto>>>> {
    let products = service.list().await?;
    let total = products.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(products),
        None,
        Some(Meta { total }),
    )))
}
