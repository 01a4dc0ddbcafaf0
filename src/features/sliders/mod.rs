//! Homepage promotional sliders.
//!
//! Each slider has a unique sort order and a free-form JSON `config`
//! consumed by the storefront frontend.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/sliders?includeInactive=true` | List sliders |
//! | GET | `/sliders/{id}` | Get slider |
//! | POST | `/sliders` | Create slider |
//! | PUT | `/sliders/{id}` | Partially update slider |
//! | DELETE | `/sliders/{id}` | Delete slider |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgSliderRepository;
pub use services::SliderService;
