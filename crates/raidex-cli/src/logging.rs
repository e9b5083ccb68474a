//! Console and log-file setup.
//!
//! Every run appends to `logs/raidextractor.log` next to the executable.
//! The log file is best effort: if it cannot be opened the run continues
//! with console logging only.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_FILE_NAME: &str = "raidextractor.log";
const DEFAULT_FILTER: &str = "raidex=info,raid_extractor=info";

/// `logs/` next to the executable, or under the working directory
pub fn default_log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
}

fn open_log_file(dir: &Path) -> io::Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Returns the log file path when file
/// logging could be enabled.
pub fn init(log_dir: &Path) -> Option<PathBuf> {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter());

    match open_log_file(log_dir) {
        Ok((log_file, path)) => {
            // `Mutex<File>` is a `MakeWriter` that locks per event
            let file = tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter());
            tracing_subscriber::registry()
                .with(console)
                .with(file)
                .init();
            Some(path)
        }
        Err(e) => {
            tracing_subscriber::registry().with(console).init();
            tracing::warn!(
                "Could not open log file in {}: {}",
                log_dir.display(),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_directory_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let (mut file, path) = open_log_file(&log_dir).unwrap();
        file.write_all(b"first\n").unwrap();
        drop(file);
        let (mut file, _) = open_log_file(&log_dir).unwrap();
        file.write_all(b"second\n").unwrap();
        file.flush().unwrap();

        assert_eq!(path, log_dir.join(LOG_FILE_NAME));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_fails_when_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("logs");
        fs::write(&blocker, "").unwrap();

        assert!(open_log_file(&blocker).is_err());
    }
}
