use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

/// Log file name created under the mawil home directory.
pub const LOG_FILE_NAME: &str = "mawil.log";

/// Opens the append-only log file inside `dir`, creating the directory when
/// needed.
///
/// # Errors
/// Returns an error when the directory or file cannot be created.
pub fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
}

/// Installs the global tracing subscriber writing plain text into `dir`.
///
/// The terminal is owned by the UI, so nothing is written to stdout.
///
/// # Errors
/// Returns an error when the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init(dir: &Path) -> io::Result<()> {
    let log_file = open_log_file(dir)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(log_file))
        .try_init()
        .map_err(|error| io::Error::other(error.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_open_log_file_creates_missing_directory() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let log_dir = temp_dir.path().join("nested").join(".mawil");

        // Act
        let log_file = open_log_file(&log_dir);

        // Assert
        assert!(log_file.is_ok());
        assert!(log_dir.join(LOG_FILE_NAME).is_file());
    }

    #[test]
    fn test_open_log_file_appends_to_existing_content() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(LOG_FILE_NAME), "first\n").expect("failed to seed log");

        // Act
        let mut log_file = open_log_file(temp_dir.path()).expect("failed to open log");
        log_file.write_all(b"second\n").expect("failed to write log");

        // Assert
        let contents =
            fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).expect("failed to read log");
        assert_eq!(contents, "first\nsecond\n");
    }
}
