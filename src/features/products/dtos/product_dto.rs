use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::products::models::Product;

/// Product entry in the public listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSummaryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
}

impl From<Product> for ProductSummaryDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            slug: p.slug,
            price: p.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_listed_columns_only() {
        let dto = ProductSummaryDto::from(Product {
            id: 3,
            name: "Red Roses Bouquet".to_string(),
            slug: "red-roses".to_string(),
            price: Decimal::new(2999, 2),
        });

        let json = serde_json::to_value(&dto).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 4);
        assert_eq!(json["slug"], "red-roses");
        assert_eq!(dto.price, Decimal::new(2999, 2));
    }
}
