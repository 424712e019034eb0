// backend/src/config.rs

use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

pub const DATA_DIR_ENV: &str = "JOBTRACK_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Log filter used when RUST_LOG is unset; keeps command output clean.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Flag beats environment beats default.
    pub fn resolve(flag: Option<PathBuf>, env_value: Option<String>) -> Self {
        let data_dir = flag
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self { data_dir }
    }

    pub fn from_env(flag: Option<PathBuf>) -> Self {
        Self::resolve(flag, env::var(DATA_DIR_ENV).ok())
    }
}

/// Structured logs to stderr, filtered by RUST_LOG.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[yare::parameterized(
        flag_wins = { Some("cli"), Some("env"), "cli" },
        env_used = { None, Some("env"), "env" },
        blank_env_ignored = { None, Some("  "), "data" },
        default = { None, None, "data" },
    )]
    fn data_dir_precedence(flag: Option<&str>, env_value: Option<&str>, expected: &str) {
        let cfg = Config::resolve(flag.map(PathBuf::from), env_value.map(String::from));
        assert_eq!(cfg.data_dir, PathBuf::from(expected));
    }
}
