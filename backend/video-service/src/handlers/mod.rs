//! HTTP handlers for Video Service
//!
//! Route table plus the JSON body settings shared by every write endpoint.

pub mod videos;

use actix_web::{web, HttpResponse};

use video_core::VideoPayload;

use crate::error::{AppError, Result};

pub use videos::{clear_all_videos, create_video, delete_video, get_video, list_videos, update_video};

/// Greeting served at `/`
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Hello World!")
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

/// Body extraction for `web::Json`: any content type, bounded size, and
/// parse failures reported in the same envelope as field errors.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected request body");
            AppError::BadRequest(err.to_string()).into()
        })
}

/// Size limit for handlers that read the raw body (`web::Bytes`).
pub fn payload_config(limit: usize) -> web::PayloadConfig {
    web::PayloadConfig::new(limit)
}

/// Parse a raw body into a JSON object, with the same error envelope as `json_config`.
pub fn parse_payload(body: &[u8]) -> Result<VideoPayload> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest(format!("Json deserialize error: {}", err))
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .service(
            web::resource("/videos/testing/all-data").route(web::delete().to(clear_all_videos)),
        )
        .service(
            web::resource("/videos")
                .route(web::get().to(list_videos))
                .route(web::post().to(create_video)),
        )
        .service(
            web::resource("/videos/{id}")
                .route(web::get().to(get_video))
                .route(web::put().to(update_video))
                .route(web::delete().to(delete_video)),
        );
}
