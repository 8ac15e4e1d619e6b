use std::env;

use slog::Level;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "RC_FILTER_LOG";

/// Returns the value of the environment variable `key`.
/// If the variable is not set, returns the provided fallback value or an empty string if no fallback is provided.
pub fn get_env(key: &str, fallback: Option<&str>) -> String {
    env::var(key).unwrap_or_else(|_| fallback.unwrap_or("").to_string())
}

/// Parses a level name ("debug", "info", "warn", ...); anything unknown is `Info`.
pub fn parse_level(name: &str) -> Level {
    name.trim().to_lowercase().parse().unwrap_or(Level::Info)
}

pub fn log_level() -> Level {
    parse_level(&get_env(LOG_LEVEL_ENV, Some("info")))
}
