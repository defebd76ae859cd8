//! Video catalog constants

/// Maximum video title length
pub const MAX_TITLE_LENGTH: usize = 40;

/// Maximum author name length
pub const MAX_AUTHOR_LENGTH: usize = 20;

/// Lowest accepted age restriction
pub const MIN_AGE_RESTRICTION: u8 = 1;

/// Highest accepted age restriction
pub const MAX_AGE_RESTRICTION: u8 = 18;

/// Delay between creation and publication (24 hours)
pub const PUBLICATION_DELAY_HOURS: i64 = 24;

/// First id handed out by a fresh store
pub const FIRST_VIDEO_ID: u64 = 1;

/// JSON field names as they appear on the wire
pub mod fields {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const CAN_BE_DOWNLOADED: &str = "canBeDownloaded";
    pub const MIN_AGE_RESTRICTION: &str = "minAgeRestriction";
    pub const PUBLICATION_DATE: &str = "publicationDate";
    pub const AVAILABLE_RESOLUTIONS: &str = "availableResolutions";
}
