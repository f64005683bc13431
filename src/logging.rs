use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::Config;

const LOG_FILE_PREFIX: &str = "padelmatch-sync";
const MAX_LOG_FILES: usize = 14;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            enable_file_logs: false,
            log_dir: "./logs".to_string(),
        }
    }
}

impl From<&Config> for LogConfig {
    fn from(config: &Config) -> Self {
        Self {
            log_level: config.log_level.clone(),
            enable_file_logs: config.enable_file_logs,
            log_dir: config.log_dir.clone(),
        }
    }
}

fn build_file_appender(log_dir: &str) -> Result<RollingFileAppender, String> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .map_err(|e| e.to_string())
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// keep the first subscriber. If the log directory is unusable the service
/// still starts with stdout logging only.
pub fn init_tracing(config: &LogConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let stdout_layer = fmt::layer().with_target(true).with_thread_ids(false);
    let registry = Registry::default().with(env_filter).with(stdout_layer);

    if !config.enable_file_logs {
        report_init_error(registry.try_init().err());
        return;
    }

    match build_file_appender(&config.log_dir) {
        Ok(appender) => {
            let file_layer = fmt::layer().with_writer(appender).with_ansi(false).json();
            report_init_error(registry.with(file_layer).try_init().err());
        }
        Err(e) => {
            report_init_error(registry.try_init().err());
            tracing::warn!(log_dir = %config.log_dir, error = %e, "File logging disabled");
        }
    }
}

// An already-installed global subscriber is expected in tests.
fn report_init_error(err: Option<tracing_subscriber::util::TryInitError>) {
    if let Some(e) = err {
        let msg = e.to_string();
        if !msg.contains("already been set") {
            eprintln!("failed to initialize tracing: {msg}");
        }
    }
}
