use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use padelmatch_sync::config::Config;
use padelmatch_sync::engine::config::MatchingConfig;
use padelmatch_sync::engine::MatchingEngine;
use padelmatch_sync::logging::{init_tracing, LogConfig};
use padelmatch_sync::response::panic_response;
use padelmatch_sync::routes::build_router;
use padelmatch_sync::state::AppState;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&LogConfig::from(&config));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting padelmatch-sync");

    let matching_config = MatchingConfig::from_env(&config.engine);
    if let Err(e) = matching_config.validate() {
        tracing::error!(error = %e, "Refusing to start with invalid matching config");
        std::process::exit(1);
    }
    tracing::info!(
        default_mode = %matching_config.ranking.default_mode,
        max_candidates = matching_config.ranking.max_candidates,
        "Matching engine configured"
    );

    let engine = Arc::new(MatchingEngine::new(matching_config));
    let state = AppState::new(engine, &config);

    let cors_layer = build_cors_layer(&config);

    let app = build_router(state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!(%addr, "Listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "HTTP server crashed");
    }

    tracing::info!("Shutdown complete");
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE, header::ACCEPT];

    if config.cors_origin.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(headers)
            .allow_methods(methods);
    }

    match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_headers(headers)
            .allow_methods(methods),
        Err(e) => {
            panic!(
                "FATAL: Invalid CORS_ORIGIN '{}': {}. \
                 Fix the CORS_ORIGIN environment variable.",
                config.cors_origin, e
            );
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("Shutdown signal received");
}
