pub mod slider_dto;

pub use slider_dto::{CreateSliderDto, ListSlidersQuery, SliderResponseDto, UpdateSliderDto};
