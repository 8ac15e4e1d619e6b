use std::error::Error;
use std::io;
use std::sync::Mutex;

use slog::{error, o, Drain, Level, LevelFilter, Logger};

/// Joins the chain of causes below `err` into one string.
pub fn cause_chain(err: &(dyn Error + 'static)) -> String {
    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes.join(": ")
}

/// JSON logger on stderr, keeping stdout free for user-facing messages.
pub fn get_logger() -> Logger {
    new_logger(super::log_level())
}

pub fn new_logger(level: Level) -> Logger {
    let drain = slog_json::Json::default(io::stderr()).fuse();
    let drain = Mutex::new(drain).fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!("app" => env!("CARGO_PKG_NAME")))
}

pub fn error_context(logger: &Logger, context: &str, err: &(dyn Error + 'static)) {
    error!(logger, "{}", context; "error" => err.to_string(), "causes" => cause_chain(err));
}
