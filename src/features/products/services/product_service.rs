use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::ProductSummaryDto;
use crate::features::products::repositories::ProductRepository;
use crate::shared::constants::PRODUCT_LIST_LIMIT;

/// Service for product listings
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// List the first page of products
    pub async fn list(&self) -> Result<Vec<ProductSummaryDto>> {
        let products = self.repo.list(PRODUCT_LIST_LIMIT).await.map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(products.into_iter().map(ProductSummaryDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;

    #[tokio::test]
    async fn test_list_is_capped_and_ordered() {
        let store = Arc::new(InMemoryStore::new());
        for i in 0..25 {
            store
                .add_product(&format!("Product {}", i), &format!("product-{}", i), 1)
                .await;
        }

        let products = ProductService::new(store).list().await.unwrap();

        assert_eq!(products.len(), PRODUCT_LIST_LIMIT as usize);
        assert!(products.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(products[0].slug, "product-0");
    }
}
