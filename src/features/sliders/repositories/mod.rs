pub mod slider_repository;

pub use slider_repository::{PgSliderRepository, SliderRepository};
