use std::path::PathBuf;
use tracing::Level;

pub const WORKSPACE_ENV: &str = "GRADINGD_WORKSPACE";
pub const LOG_ENV: &str = "GRADINGD_LOG";

/// Startup settings. Everything else arrives through IPC params.
#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace to open before the first request.
    pub workspace: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let workspace = lookup(WORKSPACE_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let log_level = lookup(LOG_ENV)
            .and_then(|v| v.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);
        Self {
            workspace,
            log_level,
        }
    }
}
