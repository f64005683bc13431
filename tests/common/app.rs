use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::Router;

use padelmatch_sync::config::{Config, EngineEnvConfig};
use padelmatch_sync::constants::DEFAULT_MAX_BODY_BYTES;
use padelmatch_sync::engine::config::MatchingConfig;
use padelmatch_sync::engine::MatchingEngine;
use padelmatch_sync::routes::build_router;
use padelmatch_sync::state::AppState;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub config: Config,
}

// Config is built directly so parallel tests never race on env vars.
fn test_config(engine: EngineEnvConfig, max_body_bytes: usize) -> Config {
    Config {
        host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
        port: 3000,
        log_level: "info".to_string(),
        enable_file_logs: false,
        log_dir: "./logs".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        max_body_bytes,
        engine,
    }
}

fn spawn_with(engine: EngineEnvConfig, max_body_bytes: usize) -> TestApp {
    let config = test_config(engine, max_body_bytes);
    let matching = MatchingConfig::from_env(&config.engine);
    let state = AppState::new(Arc::new(MatchingEngine::new(matching)), &config);
    let app = build_router(state.clone());

    TestApp { app, state, config }
}

pub async fn spawn_test_server() -> TestApp {
    spawn_with(EngineEnvConfig::default(), DEFAULT_MAX_BODY_BYTES)
}

pub async fn spawn_test_server_with_engine(engine: EngineEnvConfig) -> TestApp {
    spawn_with(engine, DEFAULT_MAX_BODY_BYTES)
}

pub async fn spawn_test_server_with_body_limit(max_body_bytes: usize) -> TestApp {
    spawn_with(EngineEnvConfig::default(), max_body_bytes)
}
