pub mod slider;

pub use slider::{NewSlider, Slider, SliderPatch};
