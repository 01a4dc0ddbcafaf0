use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;

/// Database model for a homepage slider
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Slider {
    pub id: i32,
    pub title: Option<String>,
    pub eyebrow: Option<String>,
    pub subtitle: Option<String>,
    pub alt: Option<String>,
    pub image: Option<String>,
    pub href: Option<String>,
    pub config: Value,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a slider insert, defaults already applied
#[derive(Debug, Clone)]
pub struct NewSlider {
    pub title: Option<String>,
    pub eyebrow: Option<String>,
    pub subtitle: Option<String>,
    pub alt: Option<String>,
    pub image: Option<String>,
    pub href: Option<String>,
    pub config: Value,
    pub sort_order: i32,
    pub active: bool,
}

/// Field-by-field changes to an existing slider.
///
/// For the nullable text fields, `Some(None)` clears the value and `None`
/// leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct SliderPatch {
    pub title: Option<Option<String>>,
    pub eyebrow: Option<Option<String>>,
    pub subtitle: Option<Option<String>>,
    pub alt: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub href: Option<Option<String>>,
    pub config: Option<Value>,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}

impl SliderPatch {
    pub fn apply(self, slider: Slider) -> Slider {
        Slider {
            title: self.title.unwrap_or(slider.title),
            eyebrow: self.eyebrow.unwrap_or(slider.eyebrow),
            subtitle: self.subtitle.unwrap_or(slider.subtitle),
            alt: self.alt.unwrap_or(slider.alt),
            image: self.image.unwrap_or(slider.image),
            href: self.href.unwrap_or(slider.href),
            config: self.config.unwrap_or(slider.config),
            sort_order: self.sort_order.unwrap_or(slider.sort_order),
            active: self.active.unwrap_or(slider.active),
            ..slider
        }
    }
}
