//! Rotating line writer for trace output.
//!
//! Appends JSON lines to a file, rotating it to a single `.1` backup once it
//! exceeds a fixed size so trace output never grows without bound.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Thread-safe rotating line writer.
///
/// The file handle opens lazily on first write and is guarded by a `Mutex` so
/// the exporter can be driven from any thread.
pub struct FileWriter {
    /// Path to the primary trace file.
    file_path: PathBuf,
    /// Lazily-initialized file handle.
    handle: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer for the given path; the file is not opened until the
    /// first write, so construction always succeeds.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            handle: Mutex::new(None),
        }
    }

    /// Writes one line, rotating first if the file grew past the limit.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk full) or a poisoned lock.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut handle = self.handle.lock().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("writer lock poisoned: {e}"),
            )
        })?;

        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *handle = None;
                self.rotate()?;
            }
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *handle = Some(file);
        }

        let file = handle.as_mut().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "no trace file available")
        })?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Moves the current file to `<name>.1`, replacing any previous backup.
    fn rotate(&self) -> std::io::Result<()> {
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(".1");

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}
