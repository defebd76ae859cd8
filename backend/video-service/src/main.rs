use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use video_core::VideoStore;

use video_service::config::Config;
use video_service::{handlers, seed, telemetry, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init_tracing(config.log.format);

    tracing::info!("Starting video-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = Arc::new(VideoStore::new());
    if config.app.seed_demo_data {
        let seeded = seed::seed_demo_videos(&store);
        tracing::info!(count = seeded.len(), "Demo videos seeded");
    }

    let state = AppState::new(store);
    let json_limit = config.app.json_limit;

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config(json_limit))
            .app_data(handlers::payload_config(json_limit))
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure_routes)
    });
    if let Some(workers) = config.app.workers {
        server = server.workers(workers);
    }

    let addr = config.bind_address();
    tracing::info!("Listening on {}", addr);

    server
        .bind(&addr)
        .with_context(|| format!("Failed to bind {}", addr))?
        .run()
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
