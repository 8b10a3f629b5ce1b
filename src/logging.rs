// src/logging.rs

use crate::constants::APP_NAME;
use crate::errors::{BuddyError, BuddyResult};
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle};
use std::path::Path;

/// Starts file logging under `dir`. `RUST_LOG` takes precedence over `level`.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn init_logging(dir: &Path, level: &str) -> BuddyResult<LoggerHandle> {
    Logger::try_with_env_or_str(level)
        .map_err(|e| BuddyError::logging_error(format!("Invalid log spec '{}': {}", level, e)))?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(APP_NAME)
                .suppress_timestamp(),
        )
        .append()
        .format(detailed_format)
        .start()
        .map_err(|e| BuddyError::logging_error(format!("Failed to start logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_invalid_level_spec_is_rejected() {
        std::env::remove_var("RUST_LOG");
        let dir = tempdir().unwrap();

        let result = init_logging(dir.path(), "startup_buddy=chatty");
        assert!(matches!(result, Err(BuddyError::Logging(_))));
    }

    #[test]
    fn test_logs_to_file_in_dir() {
        let dir = tempdir().unwrap();
        let handle = init_logging(dir.path(), "info").unwrap();

        log::info!("logger smoke test");
        handle.flush();

        assert!(dir.path().join(format!("{}.log", APP_NAME)).exists());
    }
}
