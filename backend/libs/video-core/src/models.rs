//! Core video data models

use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::PUBLICATION_DELAY_HOURS;

pub type VideoId = u64;

/// Resolution labels a video may declare support for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    pub const ALL: [Resolution; 8] = [
        Resolution::P144,
        Resolution::P240,
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P144 => "P144",
            Resolution::P240 => "P240",
            Resolution::P360 => "P360",
            Resolution::P480 => "P480",
            Resolution::P720 => "P720",
            Resolution::P1080 => "P1080",
            Resolution::P1440 => "P1440",
            Resolution::P2160 => "P2160",
        }
    }

    /// Exact, case-sensitive lookup of a resolution label
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resolution| resolution.as_str() == label)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored video metadata
///
/// `publication_date` is not a field: it is derived from `created_at`
/// every time it is read or serialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub available_resolutions: Option<Vec<Resolution>>,
}

impl Video {
    pub fn publication_date(&self) -> DateTime<Utc> {
        publication_date_for(self.created_at)
    }
}

pub fn publication_date_for(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::hours(PUBLICATION_DELAY_HOURS)
}

/// Format a timestamp the way the API exposes it (`2024-01-01T12:00:00.000Z`)
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Serialize for Video {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Video", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("author", &self.author)?;
        state.serialize_field("canBeDownloaded", &self.can_be_downloaded)?;
        state.serialize_field("minAgeRestriction", &self.min_age_restriction)?;
        state.serialize_field("createdAt", &format_timestamp(self.created_at))?;
        state.serialize_field(
            "publicationDate",
            &format_timestamp(self.publication_date()),
        )?;
        state.serialize_field("availableResolutions", &self.available_resolutions)?;
        state.end()
    }
}

/// Validated input for a new video; the store assigns id and creation time
#[derive(Debug, Clone, PartialEq)]
pub struct NewVideo {
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub available_resolutions: Option<Vec<Resolution>>,
}

impl NewVideo {
    pub fn into_video(self, id: VideoId, created_at: DateTime<Utc>) -> Video {
        Video {
            id,
            title: self.title,
            author: self.author,
            can_be_downloaded: self.can_be_downloaded,
            min_age_restriction: self.min_age_restriction,
            created_at,
            available_resolutions: self.available_resolutions,
        }
    }
}

/// Validated update; `None` means the field was not supplied.
///
/// `Some(None)` on the nullable fields means an explicit `null`, which clears them.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoPatch {
    pub title: String,
    pub author: String,
    pub can_be_downloaded: Option<bool>,
    pub min_age_restriction: Option<Option<u8>>,
    pub available_resolutions: Option<Option<Vec<Resolution>>>,
}

impl VideoPatch {
    /// Shallow merge into `video`. Identity fields are never touched.
    pub fn apply_to(self, video: &mut Video) {
        video.title = self.title;
        video.author = self.author;
        if let Some(can_be_downloaded) = self.can_be_downloaded {
            video.can_be_downloaded = can_be_downloaded;
        }
        if let Some(min_age_restriction) = self.min_age_restriction {
            video.min_age_restriction = min_age_restriction;
        }
        if let Some(resolutions) = self.available_resolutions {
            video.available_resolutions = resolutions;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_video() -> Video {
        Video {
            id: 7,
            title: "video1".to_string(),
            author: "author1".to_string(),
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap(),
            available_resolutions: Some(vec![Resolution::P144, Resolution::P360]),
        }
    }

    #[test]
    fn test_resolution_parse() {
        assert_eq!(Resolution::parse("P1080"), Some(Resolution::P1080));
        assert_eq!(Resolution::parse("p1080"), None);
        assert_eq!(Resolution::parse("P4320"), None);
        for resolution in Resolution::ALL {
            assert_eq!(Resolution::parse(resolution.as_str()), Some(resolution));
        }
    }

    #[test]
    fn test_publication_date_is_one_day_after_creation() {
        let video = sample_video();
        assert_eq!(
            video.publication_date(),
            Utc.with_ymd_and_hms(2024, 2, 1, 23, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_video_serializes_derived_publication_date() {
        let value = serde_json::to_value(sample_video()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "title": "video1",
                "author": "author1",
                "canBeDownloaded": false,
                "minAgeRestriction": null,
                "createdAt": "2024-01-31T23:30:00.000Z",
                "publicationDate": "2024-02-01T23:30:00.000Z",
                "availableResolutions": ["P144", "P360"],
            })
        );
    }

    #[test]
    fn test_video_deserialize_ignores_publication_date() {
        let json = serde_json::to_string(&sample_video()).unwrap();
        let parsed: Video = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_video());
    }

    #[test]
    fn test_patch_keeps_unsupplied_fields() {
        let mut video = sample_video();
        VideoPatch {
            title: "renamed".to_string(),
            author: "author1".to_string(),
            can_be_downloaded: None,
            min_age_restriction: None,
            available_resolutions: None,
        }
        .apply_to(&mut video);

        assert_eq!(video.title, "renamed");
        assert!(!video.can_be_downloaded);
        assert_eq!(
            video.available_resolutions,
            Some(vec![Resolution::P144, Resolution::P360])
        );
    }

    #[test]
    fn test_patch_can_clear_age_restriction() {
        let mut video = sample_video();
        video.min_age_restriction = Some(16);

        VideoPatch {
            title: video.title.clone(),
            author: video.author.clone(),
            can_be_downloaded: Some(true),
            min_age_restriction: Some(None),
            available_resolutions: Some(Some(vec![Resolution::P2160])),
        }
        .apply_to(&mut video);

        assert_eq!(video.min_age_restriction, None);
        assert!(video.can_be_downloaded);
        assert_eq!(video.available_resolutions, Some(vec![Resolution::P2160]));
        assert_eq!(video.id, 7);
    }

    #[test]
    fn test_patch_with_null_resolutions_clears_them() {
        let mut video = sample_video();
        VideoPatch {
            title: video.title.clone(),
            author: video.author.clone(),
            can_be_downloaded: None,
            min_age_restriction: None,
            available_resolutions: Some(None),
        }
        .apply_to(&mut video);

        assert_eq!(video.available_resolutions, None);
    }
}
