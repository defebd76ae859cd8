/// Video handlers - CRUD endpoints over the in-memory store
use actix_web::{web, HttpResponse};
use chrono::Utc;
use video_core::{validate_create, validate_update, VideoId, VideoPayload};

use super::parse_payload;

use crate::error::{AppError, Result};
use crate::AppState;

/// Ids that are not integers can never match a stored video.
fn parse_video_id(raw: &str) -> Result<VideoId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Video {} not found", raw)))
}

/// List every video in insertion order
pub async fn list_videos(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.store.list_all()))
}

/// Create a new video
pub async fn create_video(
    state: web::Data<AppState>,
    payload: web::Json<VideoPayload>,
) -> Result<HttpResponse> {
    let new_video = validate_create(&payload).map_err(|errors| {
        tracing::debug!(errors = errors.len(), "Video create rejected");
        errors
    })?;

    let video = state.store.create(new_video, Utc::now());
    tracing::info!(video_id = video.id, title = %video.title, "Video created");

    Ok(HttpResponse::Created().json(video))
}

/// Get a video by ID
pub async fn get_video(
    state: web::Data<AppState>,
    video_id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_video_id(&video_id)?;
    match state.store.get_by_id(id) {
        Some(video) => Ok(HttpResponse::Ok().json(video)),
        None => Err(AppError::NotFound(format!("Video {} not found", id))),
    }
}

/// Update an existing video
///
/// Existence is checked before the body is even parsed, so an unknown id is
/// 404 whatever the payload looks like.
pub async fn update_video(
    state: web::Data<AppState>,
    video_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let id = parse_video_id(&video_id)?;
    if state.store.get_by_id(id).is_none() {
        return Err(AppError::NotFound(format!("Video {} not found", id)));
    }

    let payload = parse_payload(&body)?;
    let patch = validate_update(&payload).map_err(|errors| {
        tracing::debug!(video_id = id, errors = errors.len(), "Video update rejected");
        errors
    })?;

    state.store.update(id, patch)?;
    tracing::info!(video_id = id, "Video updated");

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a video
pub async fn delete_video(
    state: web::Data<AppState>,
    video_id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_video_id(&video_id)?;
    state.store.delete_by_id(id)?;
    tracing::info!(video_id = id, "Video deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// Testing hook: drop every video
pub async fn clear_all_videos(state: web::Data<AppState>) -> Result<HttpResponse> {
    let count = state.store.clear();
    tracing::info!(count, "All videos cleared");

    Ok(HttpResponse::NoContent().finish())
}
