pub mod slider_service;

pub use slider_service::SliderService;
