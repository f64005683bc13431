use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use crate::constants::{DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_CANDIDATES};
use crate::engine::types::MatchMode;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub cors_origin: String,
    pub max_body_bytes: usize,
    pub engine: EngineEnvConfig,
}

/// Engine settings that may be overridden per deployment. Scoring
/// constants stay at their compiled defaults.
#[derive(Debug, Clone)]
pub struct EngineEnvConfig {
    pub default_mode: MatchMode,
    pub max_candidates: usize,
}

impl Default for EngineEnvConfig {
    fn default() -> Self {
        Self {
            default_mode: MatchMode::Competitive,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env_or_parse("HOST", IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))),
            port: env_or_parse("PORT", 3000_u16),
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            cors_origin: env_or("CORS_ORIGIN", "http://localhost:5173"),
            max_body_bytes: env_or_parse("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
            engine: EngineEnvConfig {
                default_mode: env_or_parse("MATCH_DEFAULT_MODE", MatchMode::Competitive),
                max_candidates: env_or_parse("MATCH_MAX_CANDIDATES", DEFAULT_MAX_CANDIDATES),
            },
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
