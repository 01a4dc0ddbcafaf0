use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryPatch, NewCategory};
use crate::shared::types::double_option;
use crate::shared::validation::SLUG_REGEX;

/// Request DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 255, message = "Slug must be 1-255 characters"),
        regex(path = *SLUG_REGEX, message = "Slug must be lowercase alphanumeric segments separated by single hyphens")
    )]
    pub slug: String,

    /// Optional image URL
    #[validate(length(max = 2048, message = "Image URL must not exceed 2048 characters"))]
    pub image: Option<String>,

    /// Parent category id; omit to create a top-level category
    pub parent_id: Option<i32>,
}

impl From<CreateCategoryDto> for NewCategory {
    fn from(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            image: dto.image,
            parent_id: dto.parent_id,
        }
    }
}

/// Request DTO for a partial category update.
///
/// Absent fields keep their current value. `image: null` removes the image.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 255, message = "Slug must be 1-255 characters"),
        regex(path = *SLUG_REGEX, message = "Slug must be lowercase alphanumeric segments separated by single hyphens")
    )]
    pub slug: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 2048, message = "Image URL must not exceed 2048 characters"))]
    pub image: Option<Option<String>>,
}

impl From<UpdateCategoryDto> for CategoryPatch {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            image: dto.image,
        }
    }
}

/// Response DTO for a single category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub parent_id: Option<i32>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            image: c.image,
            parent_id: c.parent_id,
        }
    }
}

/// Minimal child entry nested under a top-level category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryChildDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// Top-level category with its immediate children
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopLevelCategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub children: Vec<CategoryChildDto>,
}

/// Any category annotated with its parent and immediate children
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHierarchyDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub parent_id: Option<i32>,
    pub children: Vec<CategoryResponseDto>,
}

/// Group categories by parent id, preserving input order
fn children_by_parent(categories: &[Category]) -> HashMap<i32, Vec<&Category>> {
    let mut groups: HashMap<i32, Vec<&Category>> = HashMap::new();
    for category in categories {
        if let Some(parent_id) = category.parent_id {
            groups.entry(parent_id).or_default().push(category);
        }
    }
    groups
}

impl TopLevelCategoryDto {
    /// Build the top-level listing from an id-ordered flat list
    pub fn from_flat(categories: &[Category]) -> Vec<TopLevelCategoryDto> {
        let children = children_by_parent(categories);

        categories
            .iter()
            .filter(|c| c.is_top_level())
            .map(|root| TopLevelCategoryDto {
                id: root.id,
                name: root.name.clone(),
                slug: root.slug.clone(),
                image: root.image.clone(),
                children: children
                    .get(&root.id)
                    .map(|kids| {
                        kids.iter()
                            .map(|c| CategoryChildDto {
                                id: c.id,
                                name: c.name.clone(),
                                slug: c.slug.clone(),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }
}

impl CategoryHierarchyDto {
    /// Annotate every category of an id-ordered flat list with its children
    pub fn from_flat(categories: &[Category]) -> Vec<CategoryHierarchyDto> {
        let children = children_by_parent(categories);

        categories
            .iter()
            .map(|category| CategoryHierarchyDto {
                id: category.id,
                name: category.name.clone(),
                slug: category.slug.clone(),
                image: category.image.clone(),
                parent_id: category.parent_id,
                children: children
                    .get(&category.id)
                    .map(|kids| {
                        kids.iter()
                            .map(|c| CategoryResponseDto::from((*c).clone()))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(id: i32, parent_id: Option<i32>, slug: &str) -> Category {
        Category {
            id,
            parent_id,
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Category> {
        vec![
            category(1, None, "flowers"),
            category(2, Some(1), "roses"),
            category(3, None, "cakes"),
            category(4, Some(1), "lilies"),
            category(5, Some(2), "red-roses"),
        ]
    }

    #[test]
    fn test_top_level_only_includes_roots_with_direct_children() {
        let tree = TopLevelCategoryDto::from_flat(&sample());

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].slug, "flowers");
        let child_ids: Vec<i32> = tree[0].children.iter().map(|c| c.id).collect();
        assert_eq!(child_ids, vec![2, 4]);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_hierarchy_lists_every_category() {
        let all = CategoryHierarchyDto::from_flat(&sample());

        assert_eq!(all.len(), 5);
        assert_eq!(all[1].parent_id, Some(1));
        assert_eq!(all[1].children.len(), 1);
        assert_eq!(all[1].children[0].slug, "red-roses");
        assert!(all[4].children.is_empty());
    }

    #[test]
    fn test_update_dto_image_states() {
        let untouched: UpdateCategoryDto = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        let cleared: UpdateCategoryDto = serde_json::from_str(r#"{"image": null}"#).unwrap();

        assert_eq!(untouched.image, None);
        assert_eq!(cleared.image, Some(None));
    }

    #[test]
    fn test_create_dto_rejects_bad_slug() {
        let dto: CreateCategoryDto =
            serde_json::from_str(r#"{"name": "Roses", "slug": "Red Roses"}"#).unwrap();
        assert!(dto.validate().is_err());

        let dto: CreateCategoryDto =
            serde_json::from_str(r#"{"name": "Roses", "slug": "red-roses", "parentId": 1}"#)
                .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.parent_id, Some(1));
    }

    #[test]
    fn test_image_url_length_is_limited() {
        let long_url = format!("https://cdn.example.com/{}", "a".repeat(2048));

        let create = CreateCategoryDto {
            name: "Roses".to_string(),
            slug: "roses".to_string(),
            image: Some(long_url.clone()),
            parent_id: None,
        };
        assert!(create.validate().is_err());

        let update = UpdateCategoryDto {
            image: Some(Some(long_url)),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let cleared = UpdateCategoryDto {
            image: Some(None),
            ..Default::default()
        };
        assert!(cleared.validate().is_ok());
    }
}
