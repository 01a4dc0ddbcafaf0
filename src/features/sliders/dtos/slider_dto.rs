use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::sliders::models::Slider;
use crate::shared::types::double_option;

/// Query params for listing sliders
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListSlidersQuery {
    /// Include inactive sliders when set to `true`
    pub include_inactive: Option<String>,
}

impl ListSlidersQuery {
    /// Only the literal `true` opts in; anything else means active-only
    pub fn include_inactive(&self) -> bool {
        self.include_inactive.as_deref() == Some("true")
    }
}

/// Request DTO for creating a slider
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSliderDto {
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Eyebrow must not exceed 255 characters"))]
    pub eyebrow: Option<String>,

    #[validate(length(max = 1000, message = "Subtitle must not exceed 1000 characters"))]
    pub subtitle: Option<String>,

    #[validate(length(max = 255, message = "Alt text must not exceed 255 characters"))]
    pub alt: Option<String>,

    #[validate(length(max = 2048, message = "Image URL must not exceed 2048 characters"))]
    pub image: Option<String>,

    #[validate(length(max = 2048, message = "Link must not exceed 2048 characters"))]
    pub href: Option<String>,

    /// Display configuration, either a JSON value or a string containing JSON
    #[schema(value_type = Object)]
    pub config: Option<Value>,

    /// Position on the homepage; defaults to one past the current maximum
    pub sort_order: Option<i32>,

    /// Defaults to true
    pub active: Option<bool>,
}

/// Request DTO for a partial slider update.
///
/// Absent fields keep their current value; `null` clears a text field.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSliderDto {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub title: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "Eyebrow must not exceed 255 characters"))]
    pub eyebrow: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 1000, message = "Subtitle must not exceed 1000 characters"))]
    pub subtitle: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "Alt text must not exceed 255 characters"))]
    pub alt: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 2048, message = "Image URL must not exceed 2048 characters"))]
    pub image: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 2048, message = "Link must not exceed 2048 characters"))]
    pub href: Option<Option<String>>,

    #[schema(value_type = Option<Object>)]
    pub config: Option<Value>,

    pub sort_order: Option<i32>,

    pub active: Option<bool>,
}

/// Response DTO for slider
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SliderResponseDto {
    pub id: i32,
    pub title: Option<String>,
    pub eyebrow: Option<String>,
    pub subtitle: Option<String>,
    pub alt: Option<String>,
    pub image: Option<String>,
    pub href: Option<String>,
    #[schema(value_type = Object)]
    pub config: Value,
    pub sort_order: i32,
    pub active: bool,
}

impl From<Slider> for SliderResponseDto {
    fn from(s: Slider) -> Self {
        Self {
            id: s.id,
            title: s.title,
            eyebrow: s.eyebrow,
            subtitle: s.subtitle,
            alt: s.alt,
            image: s.image,
            href: s.href,
            config: s.config,
            sort_order: s.sort_order,
            active: s.active,
        }
    }
}
