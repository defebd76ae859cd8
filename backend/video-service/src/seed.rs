//! Demo catalog loaded when `APP_SEED_DEMO_DATA=true`

use chrono::Utc;
use video_core::{NewVideo, Resolution, Video, VideoStore};

fn demo_video(
    title: &str,
    author: &str,
    can_be_downloaded: bool,
    min_age_restriction: Option<u8>,
    available_resolutions: &[Resolution],
) -> NewVideo {
    NewVideo {
        title: title.to_string(),
        author: author.to_string(),
        can_be_downloaded,
        min_age_restriction,
        available_resolutions: Some(available_resolutions.to_vec()),
    }
}

pub fn demo_videos() -> Vec<NewVideo> {
    vec![
        demo_video(
            "video1",
            "author1",
            false,
            None,
            &[Resolution::P144, Resolution::P360],
        ),
        demo_video(
            "video2",
            "author2",
            true,
            Some(18),
            &[Resolution::P144, Resolution::P480],
        ),
        demo_video(
            "video3",
            "author3",
            false,
            Some(5),
            &[Resolution::P144, Resolution::P360, Resolution::P720],
        ),
    ]
}

/// Insert the demo videos through the regular create path
pub fn seed_demo_videos(store: &VideoStore) -> Vec<Video> {
    let now = Utc::now();
    demo_videos()
        .into_iter()
        .map(|video| store.create(video, now))
        .collect()
}
