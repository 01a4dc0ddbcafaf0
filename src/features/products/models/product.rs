use rust_decimal::Decimal;
use sqlx::FromRow;

/// Product row as exposed by the catalogue listing
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
}
