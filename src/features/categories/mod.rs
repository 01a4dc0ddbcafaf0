//! Product category tree.
//!
//! Categories form a two-level tree: at most eight top-level categories, each
//! with any number of children. Slugs are unique across the whole tree.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | Top-level categories with children |
//! | GET | `/categories/all` | Every category with parent and children |
//! | POST | `/categories` | Create category |
//! | PUT | `/categories/{id}` | Update name, slug or image |
//! | DELETE | `/categories/{id}` | Delete a childless, product-free category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
