//! In-memory video store
//!
//! Keeps videos in insertion order behind a single lock. Every mutation takes
//! the write lock, so readers only ever see whole mutations.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::constants::FIRST_VIDEO_ID;
use crate::error::StoreError;
use crate::models::{NewVideo, Video, VideoId, VideoPatch};

pub type Result<T> = std::result::Result<T, StoreError>;

pub struct VideoStore {
    videos: RwLock<Vec<Video>>,
    next_id: AtomicU64,
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoStore {
    pub fn new() -> Self {
        Self {
            videos: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(FIRST_VIDEO_ID),
        }
    }

    /// Snapshot of every video in insertion order
    pub fn list_all(&self) -> Vec<Video> {
        self.videos.read().clone()
    }

    pub fn get_by_id(&self, id: VideoId) -> Option<Video> {
        self.videos.read().iter().find(|video| video.id == id).cloned()
    }

    /// Reserve a fresh id. Ids are never reused, not even after `clear`.
    pub fn next_id(&self) -> VideoId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Append a video whose id was assigned by the caller
    pub fn insert(&self, video: Video) -> Result<()> {
        let mut videos = self.videos.write();
        if videos.iter().any(|existing| existing.id == video.id) {
            return Err(StoreError::DuplicateId(video.id));
        }

        // Keep the counter ahead of externally chosen ids.
        self.next_id
            .fetch_max(video.id.saturating_add(1), Ordering::Relaxed);
        videos.push(video);
        Ok(())
    }

    /// Assign an id to a validated video and append it
    pub fn create(&self, new_video: NewVideo, created_at: DateTime<Utc>) -> Video {
        let mut videos = self.videos.write();
        let video = new_video.into_video(self.next_id(), created_at);
        videos.push(video.clone());
        tracing::trace!(video_id = video.id, "video inserted");
        video
    }

    /// Overwrite the video at `id` in place. The stored id and creation time win
    /// over whatever `video` carries.
    pub fn replace(&self, id: VideoId, video: Video) -> Result<Video> {
        let mut videos = self.videos.write();
        let slot = videos
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(StoreError::NotFound(id))?;

        *slot = Video {
            id: slot.id,
            created_at: slot.created_at,
            ..video
        };
        Ok(slot.clone())
    }

    /// Merge a validated patch into the stored video as one atomic step
    pub fn update(&self, id: VideoId, patch: VideoPatch) -> Result<Video> {
        let mut videos = self.videos.write();
        let slot = videos
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(StoreError::NotFound(id))?;

        patch.apply_to(slot);
        tracing::trace!(video_id = id, "video updated");
        Ok(slot.clone())
    }

    /// Remove and return the video at `id`
    pub fn delete_by_id(&self, id: VideoId) -> Result<Video> {
        let mut videos = self.videos.write();
        let index = videos
            .iter()
            .position(|video| video.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(videos.remove(index))
    }

    /// Drop every video, returning how many were removed
    pub fn clear(&self) -> usize {
        let mut videos = self.videos.write();
        let removed = videos.len();
        videos.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.videos.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.read().is_empty()
    }
}
