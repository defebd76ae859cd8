use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::VideoId;

/// One failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

/// Ordered list of field errors, serialized as `{"errorsMessages": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{} field(s) failed validation", .errors_messages.len())]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub errors_messages: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors_messages: vec![FieldError::new(field, message)],
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors_messages.push(error);
    }

    /// Record the error of a failed check and hand back the value of a passed one.
    pub fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors_messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors_messages.len()
    }

    /// Field names in the order the errors were recorded
    pub fn fields(&self) -> Vec<&str> {
        self.errors_messages
            .iter()
            .map(|error| error.field.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Video {0} not found")]
    NotFound(VideoId),

    #[error("Video {0} already exists")]
    DuplicateId(VideoId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_wire_shape() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("title", "too long"));
        errors.push(FieldError::new("author", "missing"));

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "errorsMessages": [
                    { "message": "too long", "field": "title" },
                    { "message": "missing", "field": "author" },
                ]
            })
        );
    }

    #[test]
    fn test_check_collects_failures_only() {
        let mut errors = ValidationErrors::new();
        let passed = errors.check::<u8>(Ok(3));
        let failed = errors.check::<u8>(Err(FieldError::new("minAgeRestriction", "bad")));

        assert_eq!(passed, Some(3));
        assert_eq!(failed, None);
        assert_eq!(errors.fields(), vec!["minAgeRestriction"]);
    }
}
