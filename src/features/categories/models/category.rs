use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Values for a category insert
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub parent_id: Option<i32>,
}

/// Field-by-field changes to an existing category.
///
/// `image` distinguishes "leave as is" (`None`) from "clear" (`Some(None)`).
/// The parent is not editable.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<Option<String>>,
}

impl CategoryPatch {
    pub fn apply(self, mut category: Category) -> Category {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(slug) = self.slug {
            category.slug = slug;
        }
        if let Some(image) = self.image {
            category.image = image;
        }
        category
    }
}
