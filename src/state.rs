use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::engine::MatchingEngine;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<MatchingEngine>,
    config: Arc<Config>,
    started_at: Instant,
}

impl AppState {
    pub fn new(engine: Arc<MatchingEngine>, config: &Config) -> Self {
        Self {
            engine,
            config: Arc::new(config.clone()),
            started_at: Instant::now(),
        }
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Upper bound on pairs accepted by one ranking request
    pub fn max_candidates(&self) -> usize {
        self.engine.config().ranking.max_candidates
    }
}
