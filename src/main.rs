//! Throw Analyzer HTTP server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use throw_analyzer::adapters::{
    app_router, AnalysisAppState, PoseTrackFileSource, TempFileUploadStorage,
};
use throw_analyzer::application::handlers::analysis::AnalyzeVideoHandler;
use throw_analyzer::config::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let landmark_source = Arc::new(PoseTrackFileSource::new(config.analysis.default_fps));
    let upload_storage = Arc::new(TempFileUploadStorage::new(
        config.analysis.upload_dir_or_temp(),
        config.analysis.max_upload_bytes,
    ));
    let handler = AnalyzeVideoHandler::new(
        landmark_source,
        upload_storage,
        config.analysis.frame_stride,
    );
    let app = app_router(AnalysisAppState::new(Arc::new(handler)), &config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        frame_stride = config.analysis.frame_stride,
        "Throw analyzer listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
