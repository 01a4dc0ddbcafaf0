//! Read-only product listing.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/products` | First 20 products |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgProductRepository;
pub use services::ProductService;
