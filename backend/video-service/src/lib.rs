pub mod config;
pub mod error;
pub mod handlers;
pub mod seed;
pub mod telemetry;

use std::sync::Arc;

use video_core::VideoStore;

pub use config::Config;
pub use error::{AppError, Result};

/// Shared state handed to every worker
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<VideoStore>,
}

impl AppState {
    pub fn new(store: Arc<VideoStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(VideoStore::new()))
    }
}
