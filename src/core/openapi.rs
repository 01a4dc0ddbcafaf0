use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::sliders::{dtos as sliders_dtos, handlers as sliders_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::list_all_categories,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::list_products,
        // Sliders
        sliders_handlers::list_sliders,
        sliders_handlers::get_slider,
        sliders_handlers::create_slider,
        sliders_handlers::update_slider,
        sliders_handlers::delete_slider,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryChildDto,
            categories_dtos::TopLevelCategoryDto,
            categories_dtos::CategoryHierarchyDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::TopLevelCategoryDto>>,
            ApiResponse<Vec<categories_dtos::CategoryHierarchyDto>>,
            // Products
            products_dtos::ProductSummaryDto,
            ApiResponse<Vec<products_dtos::ProductSummaryDto>>,
            // Sliders
            sliders_dtos::CreateSliderDto,
            sliders_dtos::UpdateSliderDto,
            sliders_dtos::SliderResponseDto,
            ApiResponse<sliders_dtos::SliderResponseDto>,
            ApiResponse<Vec<sliders_dtos::SliderResponseDto>>,
        )
    ),
    tags(
        (name = "categories", description = "Two-level product category tree"),
        (name = "products", description = "Product catalogue listing"),
        (name = "sliders", description = "Homepage hero sliders"),
    ),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "API documentation for the storefront backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/categories",
            "/categories/all",
            "/categories/{id}",
            "/products",
            "/sliders",
            "/sliders/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Shop".to_string(),
            version: "2.0.0".to_string(),
            description: "Shop docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Shop");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("Shop docs"));
    }
}
