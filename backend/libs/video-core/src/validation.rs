//! Field rules for video create and update payloads
//!
//! Payloads are checked as raw JSON objects so that a wrongly-typed field is
//! reported against its own name instead of failing the whole body. Every rule
//! runs on every call; the result carries all failures in rule order.

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::constants::{
    fields, MAX_AGE_RESTRICTION, MAX_AUTHOR_LENGTH, MAX_TITLE_LENGTH, MIN_AGE_RESTRICTION,
};
use crate::error::{FieldError, ValidationErrors};
use crate::models::{NewVideo, Resolution, VideoPatch};

/// Request body as received
pub type VideoPayload = Map<String, Value>;

pub const TITLE_MESSAGE: &str = "Missing title or title length greater than 40 characters";
pub const AUTHOR_MESSAGE: &str = "Missing author or author length greater than 20 characters";
pub const RESOLUTIONS_MESSAGE: &str = "No resolution provided or incorrect resolutions provided";
pub const CAN_BE_DOWNLOADED_MESSAGE: &str = "canBeDownloaded must be a boolean";
pub const MIN_AGE_MESSAGE: &str = "Age should be null or between 1 and 18";
pub const PUBLICATION_DATE_MESSAGE: &str = "Incorrect date format";

static PUBLICATION_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?Z$")
        .expect("Invalid publication date regex")
});

/// Validate a create payload.
///
/// `canBeDownloaded` is lenient here: anything but a JSON boolean falls back to `false`.
/// `minAgeRestriction` is lenient too: anything that is not a positive number becomes `null`.
pub fn validate_create(payload: &VideoPayload) -> Result<NewVideo, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = errors.check(text_field(payload, fields::TITLE, MAX_TITLE_LENGTH, TITLE_MESSAGE));
    let author = errors.check(text_field(
        payload,
        fields::AUTHOR,
        MAX_AUTHOR_LENGTH,
        AUTHOR_MESSAGE,
    ));
    let available_resolutions = errors.check(resolutions_field(payload));
    let min_age_restriction = errors.check(create_min_age_field(payload));

    let can_be_downloaded = payload
        .get(fields::CAN_BE_DOWNLOADED)
        .and_then(Value::as_bool)
        .unwrap_or(false);

    match (title, author, available_resolutions, min_age_restriction) {
        (Some(title), Some(author), Some(available_resolutions), Some(min_age_restriction)) => {
            Ok(NewVideo {
                title,
                author,
                can_be_downloaded,
                min_age_restriction,
                available_resolutions,
            })
        }
        _ => Err(errors),
    }
}

/// Validate an update payload.
///
/// `id`, `createdAt` and unknown keys are ignored. `publicationDate` is checked
/// but never carried into the patch.
pub fn validate_update(payload: &VideoPayload) -> Result<VideoPatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = errors.check(text_field(payload, fields::TITLE, MAX_TITLE_LENGTH, TITLE_MESSAGE));
    let author = errors.check(text_field(
        payload,
        fields::AUTHOR,
        MAX_AUTHOR_LENGTH,
        AUTHOR_MESSAGE,
    ));
    let available_resolutions = errors.check(resolutions_field(payload));
    let can_be_downloaded = errors.check(can_be_downloaded_field(payload));
    let min_age_restriction = errors.check(min_age_field(payload));
    let publication_date = errors.check(publication_date_field(payload));

    match (
        title,
        author,
        available_resolutions,
        can_be_downloaded,
        min_age_restriction,
        publication_date,
    ) {
        (
            Some(title),
            Some(author),
            Some(available_resolutions),
            Some(can_be_downloaded),
            Some(min_age_restriction),
            Some(()),
        ) => Ok(VideoPatch {
            title,
            author,
            can_be_downloaded,
            min_age_restriction: payload
                .contains_key(fields::MIN_AGE_RESTRICTION)
                .then_some(min_age_restriction),
            available_resolutions: payload
                .contains_key(fields::AVAILABLE_RESOLUTIONS)
                .then_some(available_resolutions),
        }),
        _ => Err(errors),
    }
}

fn text_field(
    payload: &VideoPayload,
    field: &str,
    max_len: usize,
    message: &str,
) -> Result<String, FieldError> {
    match payload.get(field) {
        Some(Value::String(text)) if !text.is_empty() && text.chars().count() <= max_len => {
            Ok(text.clone())
        }
        _ => Err(FieldError::new(field, message)),
    }
}

fn resolutions_field(payload: &VideoPayload) -> Result<Option<Vec<Resolution>>, FieldError> {
    let invalid = || FieldError::new(fields::AVAILABLE_RESOLUTIONS, RESOLUTIONS_MESSAGE);

    match payload.get(fields::AVAILABLE_RESOLUTIONS) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| item.as_str().and_then(Resolution::parse))
            .collect::<Option<Vec<_>>>()
            .map(Some)
            .ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}

fn can_be_downloaded_field(payload: &VideoPayload) -> Result<Option<bool>, FieldError> {
    match payload.get(fields::CAN_BE_DOWNLOADED) {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(FieldError::new(
            fields::CAN_BE_DOWNLOADED,
            CAN_BE_DOWNLOADED_MESSAGE,
        )),
    }
}

/// `None` means "no restriction": absent, null, or a value that coerces to zero.
fn min_age_field(payload: &VideoPayload) -> Result<Option<u8>, FieldError> {
    let value = match payload.get(fields::MIN_AGE_RESTRICTION) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let range = f64::from(MIN_AGE_RESTRICTION)..=f64::from(MAX_AGE_RESTRICTION);
    match coerce_number(value) {
        Some(age) if age == 0.0 => Ok(None),
        Some(age) if age.fract() == 0.0 && range.contains(&age) => Ok(Some(age as u8)),
        _ => Err(FieldError::new(fields::MIN_AGE_RESTRICTION, MIN_AGE_MESSAGE)),
    }
}

/// Create-side reading: non-positive and non-numeric values mean "no restriction".
/// A positive value still has to be a whole number no greater than the maximum.
fn create_min_age_field(payload: &VideoPayload) -> Result<Option<u8>, FieldError> {
    let age = match payload.get(fields::MIN_AGE_RESTRICTION).and_then(coerce_number) {
        Some(age) if age.is_finite() && age > 0.0 => age,
        _ => return Ok(None),
    };

    if age.fract() == 0.0 && age <= f64::from(MAX_AGE_RESTRICTION) {
        Ok(Some(age as u8))
    } else {
        Err(FieldError::new(fields::MIN_AGE_RESTRICTION, MIN_AGE_MESSAGE))
    }
}

fn publication_date_field(payload: &VideoPayload) -> Result<(), FieldError> {
    match payload.get(fields::PUBLICATION_DATE) {
        None => Ok(()),
        Some(Value::String(date))
            if PUBLICATION_DATE_REGEX.is_match(date)
                && DateTime::parse_from_rfc3339(date).is_ok() =>
        {
            Ok(())
        }
        Some(_) => Err(FieldError::new(
            fields::PUBLICATION_DATE,
            PUBLICATION_DATE_MESSAGE,
        )),
    }
}

/// Loose numeric reading of a JSON value: numbers as-is, numeric strings
/// (blank counts as zero) and booleans as 0/1.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                Some(0.0)
            } else {
                text.parse::<f64>().ok().filter(|number| number.is_finite())
            }
        }
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}
