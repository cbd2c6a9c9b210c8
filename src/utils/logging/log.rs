//! Log lines for dataset writes

use std::path::Path;
use std::time::Duration;

/// Announce that a dataset is about to be written to `path`
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} -> {}", path.display());
}

/// Report a finished dataset write
///
/// `operation` is the past-tense verb shown in the message, e.g. "wrote".
pub fn log_operation_complete(operation: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!("{} {rows} rows, {} ({duration:.2?})", capitalize(operation), path.display()),
        None => log::info!("{} {rows} rows, {}", capitalize(operation), path.display()),
    }
}

/// Warn about a dataset file
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message} ({})", path.display()),
        None => log::warn!("{message}"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
