use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::database::StoreError;
use crate::core::error::{AppError, Result};
use crate::features::sliders::dtos::{CreateSliderDto, SliderResponseDto, UpdateSliderDto};
use crate::features::sliders::models::{NewSlider, SliderPatch};
use crate::features::sliders::repositories::SliderRepository;

fn sort_order_in_use(sort_order: i32) -> AppError {
    AppError::Validation(format!("Sort order {} is already in use", sort_order))
}

/// Accept config either as JSON or as a string holding JSON
fn resolve_config(config: Value) -> Result<Value> {
    match config {
        Value::String(raw) => serde_json::from_str(&raw)
            .map_err(|e| AppError::Validation(format!("Invalid JSON in config: {}", e))),
        other => Ok(other),
    }
}

/// Convert store errors raised by slider writes into client-facing errors
fn handle_write_error(e: StoreError, sort_order: i32) -> AppError {
    match e {
        StoreError::UniqueViolation { ref field } if field == "sort_order" => {
            sort_order_in_use(sort_order)
        }
        other => {
            tracing::error!("Failed to write slider: {:?}", other);
            AppError::Database(other)
        }
    }
}

/// Service for homepage sliders
pub struct SliderService {
    repo: Arc<dyn SliderRepository>,
}

impl SliderService {
    pub fn new(repo: Arc<dyn SliderRepository>) -> Self {
        Self { repo }
    }

    /// List sliders ordered by sort order
    pub async fn list(&self, include_inactive: bool) -> Result<Vec<SliderResponseDto>> {
        let sliders = self.repo.list(include_inactive).await?;
        Ok(sliders.into_iter().map(SliderResponseDto::from).collect())
    }

    /// Get slider by ID
    pub async fn get_by_id(&self, id: i32) -> Result<SliderResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(SliderResponseDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Slider with id {} not found", id)))
    }

    /// Create a slider, assigning the next free sort order when none is given
    pub async fn create(&self, dto: CreateSliderDto) -> Result<SliderResponseDto> {
        let config = match dto.config {
            Some(config) => resolve_config(config)?,
            None => Value::Object(Map::new()),
        };

        let sort_order = match dto.sort_order {
            Some(sort_order) => sort_order,
            None => self
                .repo
                .max_sort_order()
                .await?
                .unwrap_or(0)
                .checked_add(1)
                .ok_or_else(|| {
                    AppError::Validation(
                        "Sort order space exhausted; pass an explicit sortOrder".to_string(),
                    )
                })?,
        };

        if self.repo.find_by_sort_order(sort_order).await?.is_some() {
            return Err(sort_order_in_use(sort_order));
        }

        let slider = self
            .repo
            .insert(NewSlider {
                title: dto.title,
                eyebrow: dto.eyebrow,
                subtitle: dto.subtitle,
                alt: dto.alt,
                image: dto.image,
                href: dto.href,
                config,
                sort_order,
                active: dto.active.unwrap_or(true),
            })
            .await
            .map_err(|e| handle_write_error(e, sort_order))?;

        tracing::info!(
            "Slider created: id={}, sort_order={}",
            slider.id,
            slider.sort_order
        );

        Ok(slider.into())
    }

    /// Merge the supplied fields over an existing slider
    pub async fn update(&self, id: i32, dto: UpdateSliderDto) -> Result<SliderResponseDto> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Slider with id {} not found", id)))?;

        let config = dto.config.map(resolve_config).transpose()?;

        if let Some(sort_order) = dto.sort_order {
            if sort_order != existing.sort_order {
                let taken = self.repo.find_by_sort_order(sort_order).await?;
                if taken.is_some_and(|other| other.id != id) {
                    return Err(sort_order_in_use(sort_order));
                }
            }
        }

        let merged = SliderPatch {
            title: dto.title,
            eyebrow: dto.eyebrow,
            subtitle: dto.subtitle,
            alt: dto.alt,
            image: dto.image,
            href: dto.href,
            config,
            sort_order: dto.sort_order,
            active: dto.active,
        }
        .apply(existing);

        let slider = self
            .repo
            .update(&merged)
            .await
            .map_err(|e| handle_write_error(e, merged.sort_order))?
            .ok_or_else(|| AppError::NotFound(format!("Slider with id {} not found", id)))?;

        tracing::info!(
            "Slider updated: id={}, sort_order={}, active={}",
            slider.id,
            slider.sort_order,
            slider.active
        );

        Ok(slider.into())
    }

    /// Delete a slider
    pub async fn delete(&self, id: i32) -> Result<SliderResponseDto> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Slider with id {} not found", id)));
        }

        let slider = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Slider with id {} not found", id)))?;

        tracing::info!("Slider deleted: id={}", slider.id);

        Ok(slider.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;
    use serde_json::json;

    fn service() -> SliderService {
        SliderService::new(Arc::new(InMemoryStore::new()))
    }

    fn titled(title: &str) -> CreateSliderDto {
        CreateSliderDto {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn assert_validation(err: AppError, needle: &str) {
        match err {
            AppError::Validation(msg) => assert!(
                msg.contains(needle),
                "expected '{}' in '{}'",
                needle,
                msg
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let slider = service().create(CreateSliderDto::default()).await.unwrap();

        assert_eq!(slider.sort_order, 1);
        assert!(slider.active);
        assert_eq!(slider.config, json!({}));
        assert_eq!(slider.title, None);
        assert_eq!(slider.href, None);
    }

    #[tokio::test]
    async fn test_create_assigns_max_plus_one() {
        let svc = service();
        svc.create(CreateSliderDto {
            sort_order: Some(1),
            ..titled("a")
        })
        .await
        .unwrap();
        svc.create(CreateSliderDto {
            sort_order: Some(2),
            ..titled("b")
        })
        .await
        .unwrap();

        let next = svc.create(titled("c")).await.unwrap();
        assert_eq!(next.sort_order, 3);
    }

    #[tokio::test]
    async fn test_create_after_max_sort_order_is_rejected() {
        let svc = service();
        svc.create(CreateSliderDto {
            sort_order: Some(i32::MAX),
            ..Default::default()
        })
        .await
        .unwrap();

        let err = svc.create(titled("next")).await.unwrap_err();
        assert_validation(err, "Sort order space exhausted");
    }

    #[tokio::test]
    async fn test_create_duplicate_sort_order_fails() {
        let svc = service();
        svc.create(CreateSliderDto {
            sort_order: Some(5),
            ..titled("a")
        })
        .await
        .unwrap();

        let err = svc
            .create(CreateSliderDto {
                sort_order: Some(5),
                ..titled("b")
            })
            .await
            .unwrap_err();

        assert_validation(err, "already in use");
    }

    #[tokio::test]
    async fn test_create_parses_string_config() {
        let slider = service()
            .create(CreateSliderDto {
                config: Some(Value::String(r#"{"theme":"dark","delay":3}"#.to_string())),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(slider.config, json!({ "theme": "dark", "delay": 3 }));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_config() {
        let err = service()
            .create(CreateSliderDto {
                config: Some(Value::String("{not json".to_string())),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_validation(err, "Invalid JSON");
    }

    #[tokio::test]
    async fn test_update_title_only_keeps_other_fields() {
        let svc = service();
        let created = svc
            .create(CreateSliderDto {
                config: Some(json!({ "theme": "light" })),
                sort_order: Some(7),
                active: Some(false),
                href: Some("/sale".to_string()),
                ..titled("Old")
            })
            .await
            .unwrap();

        let updated = svc
            .update(
                created.id,
                UpdateSliderDto {
                    title: Some(Some("New".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title.as_deref(), Some("New"));
        assert_eq!(updated.sort_order, 7);
        assert!(!updated.active);
        assert_eq!(updated.config, json!({ "theme": "light" }));
        assert_eq!(updated.href.as_deref(), Some("/sale"));
    }

    #[tokio::test]
    async fn test_update_to_taken_sort_order_fails() {
        let svc = service();
        svc.create(titled("a")).await.unwrap();
        let second = svc.create(titled("b")).await.unwrap();

        let err = svc
            .update(
                second.id,
                UpdateSliderDto {
                    sort_order: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_validation(err, "already in use");
    }

    #[tokio::test]
    async fn test_update_keeping_own_sort_order_succeeds() {
        let svc = service();
        let slider = svc.create(titled("a")).await.unwrap();

        let updated = svc
            .update(
                slider.id,
                UpdateSliderDto {
                    sort_order: Some(slider.sort_order),
                    active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.sort_order, slider.sort_order);
        assert!(!updated.active);
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_config() {
        let svc = service();
        let slider = svc.create(titled("a")).await.unwrap();

        let err = svc
            .update(
                slider.id,
                UpdateSliderDto {
                    config: Some(Value::String("{not json".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_validation(err, "Invalid JSON");
    }

    #[tokio::test]
    async fn test_update_missing_slider_is_not_found() {
        let err = service()
            .update(1, UpdateSliderDto::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_filters_inactive_and_orders() {
        let svc = service();
        svc.create(CreateSliderDto {
            sort_order: Some(3),
            ..titled("third")
        })
        .await
        .unwrap();
        svc.create(CreateSliderDto {
            sort_order: Some(1),
            active: Some(false),
            ..titled("hidden")
        })
        .await
        .unwrap();
        svc.create(CreateSliderDto {
            sort_order: Some(2),
            ..titled("second")
        })
        .await
        .unwrap();

        let active = svc.list(false).await.unwrap();
        let titles: Vec<_> = active.iter().filter_map(|s| s.title.as_deref()).collect();
        assert_eq!(titles, vec!["second", "third"]);

        let all = svc.list(true).await.unwrap();
        let orders: Vec<i32> = all.iter().map(|s| s.sort_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let svc = service();
        let slider = svc.create(titled("a")).await.unwrap();

        let deleted = svc.delete(slider.id).await.unwrap();
        assert_eq!(deleted.id, slider.id);

        assert!(matches!(
            svc.get_by_id(slider.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete(slider.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_unique_violation_maps_to_validation() {
        let err = handle_write_error(
            StoreError::UniqueViolation {
                field: "sort_order".to_string(),
            },
            4,
        );
        assert_validation(err, "Sort order 4");
    }
}
