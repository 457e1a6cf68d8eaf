use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Opens `path` for appending, creating it when missing.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Routes tracing output to a log file.
///
/// The terminal is owned by the UI while the app runs, so logs never go to
/// stdout or stderr. `RUST_LOG` takes precedence over `level` when set.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the level is not a valid
/// filter directive, or a global subscriber is already installed.
pub fn init_logging(path: &Path, level: &str) -> Result<()> {
    let file = open_log_file(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level '{level}'"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acefit.log");

        {
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "first").unwrap();
        }
        {
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("acefit.log");
        assert!(open_log_file(&path).is_err());
    }

    #[test]
    fn test_init_logging_rejects_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("acefit.log");
        let err = init_logging(&path, "info").unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
