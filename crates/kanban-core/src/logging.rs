//! Tracing subscriber setup for hosts embedding the engine.

use crate::{EngineConfig, KanbanError, KanbanResult};
use std::path::Path;

/// Install the global tracing subscriber.
///
/// With a debug log configured, DEBUG records are appended to that file with
/// targets, thread ids and source locations. Otherwise WARN and above go to
/// stderr. Fails if a global subscriber is already installed.
pub fn init_logging(config: &EngineConfig) -> KanbanResult<()> {
    match config.debug_log.as_deref() {
        Some(log_path) => init_file_logging(log_path),
        None => tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| KanbanError::Internal(e.to_string())),
    }
}

fn init_file_logging(log_path: &Path) -> KanbanResult<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(log_file))
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| KanbanError::Internal(e.to_string()))?;

    tracing::debug!("Debug logging to {}", log_path.display());
    Ok(())
}
