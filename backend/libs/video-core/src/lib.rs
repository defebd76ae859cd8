//! Video catalog core models and rules
//!
//! Shared data structures, field validation and the in-memory store
//! used by video-service.

pub mod constants;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

pub use error::{FieldError, StoreError, ValidationErrors};
pub use models::*;
pub use store::VideoStore;
pub use validation::{validate_create, validate_update, VideoPayload};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> VideoPayload {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_create_then_update_flow() {
        let store = VideoStore::new();

        let new_video = validate_create(&payload(json!({
            "title": "Intro to Rust",
            "author": "ferris",
            "availableResolutions": ["P720", "P1080"],
        })))
        .expect("valid create payload");
        let created = store.create(new_video, Utc::now());

        let patch = validate_update(&payload(json!({
            "title": "Intro to Rust, 2nd edition",
            "author": "ferris",
            "canBeDownloaded": true,
            "minAgeRestriction": 12,
        })))
        .expect("valid update payload");
        let updated = store.update(created.id, patch).expect("video exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Intro to Rust, 2nd edition");
        assert!(updated.can_be_downloaded);
        assert_eq!(updated.min_age_restriction, Some(12));
        assert_eq!(
            updated.available_resolutions,
            Some(vec![Resolution::P720, Resolution::P1080])
        );
    }

    #[test]
    fn test_rejected_update_leaves_store_untouched() {
        let store = VideoStore::new();
        let created = store.create(
            validate_create(&payload(json!({ "title": "t", "author": "a" }))).expect("valid"),
            Utc::now(),
        );

        let errors = validate_update(&payload(json!({
            "title": "t",
            "author": "a",
            "minAgeRestriction": 19,
        })))
        .expect_err("out of range age");

        assert_eq!(errors.fields(), vec!["minAgeRestriction"]);
        assert_eq!(store.get_by_id(created.id), Some(created));
    }
}
