/// Maximum number of categories allowed without a parent
pub const MAX_TOP_LEVEL_CATEGORIES: i64 = 8;

/// Number of products returned by the public product listing
pub const PRODUCT_LIST_LIMIT: i64 = 20;
