// sink.rs - Level-filtered append-only file sink

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;
use tracing::warn;

use crate::config::SinkConfig;
use crate::errors::{SafeLock, SieveError, SieveResult};
use crate::reader;
use crate::record::LogRecord;
use crate::severity::Severity;

/// Logging sink over one append-only text file.
///
/// One instance is constructed by the process entry point and handed
/// by reference to anything that wants to log. The threshold gates
/// writes; the writer mutex serializes the open-append-close sequence
/// so concurrent lines never interleave and never get lost. The file
/// handle is acquired and released inside each call, never held open
/// across calls.
pub struct FileSink {
    path: PathBuf,
    threshold: AtomicU8,
    write_lock: Mutex<()>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, threshold: Severity) -> Self {
        Self {
            path: path.into(),
            threshold: AtomicU8::new(threshold.priority()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &SinkConfig) -> Self {
        Self::new(config.log_path.clone(), config.threshold)
    }

    /// Path of the backing store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Minimum severity that will be persisted.
    ///
    /// Read with relaxed ordering: a stale value under a concurrent
    /// `set_threshold` is an accepted race, last write wins.
    pub fn threshold(&self) -> Severity {
        Severity::from_priority(self.threshold.load(Ordering::Relaxed)).unwrap_or(Severity::Info)
    }

    /// Update the minimum severity for future writes. Never retroactive:
    /// lines already in the file are immutable history.
    pub fn set_threshold(&self, level: Severity) {
        self.threshold.store(level.priority(), Ordering::Relaxed);
    }

    /// Append one formatted line if `level` meets the threshold.
    ///
    /// Below-threshold messages return immediately with no I/O.
    /// Best-effort on failure: the error is reported on the diagnostic
    /// channel, never the log file itself, and never propagated or
    /// panicked to the caller.
    pub fn log(&self, message: &str, level: Severity) {
        if level.priority() < self.threshold().priority() {
            return;
        }

        let record = LogRecord::new(message, level);
        if let Err(e) = self.append(&record) {
            warn!(
                message = "Failed to append log record",
                path = %self.path.display(),
                error = %e
            );
        }
    }

    /// Filtered scan of this sink's own file.
    ///
    /// Holds the writer lock for the duration of the scan, so the
    /// reader can never observe a partially written line.
    pub fn read_filtered(&self, level: Severity) -> Vec<String> {
        match self.write_lock.safe_lock() {
            Ok(_guard) => reader::read_filtered(&self.path, level),
            Err(e) => {
                warn!(message = "Writer lock unavailable for read", error = %e);
                Vec::new()
            }
        }
    }

    fn append(&self, record: &LogRecord) -> SieveResult<()> {
        let _guard = self.write_lock.safe_lock()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SieveError::io("opening log file for append", e))?;

        writeln!(file, "{}", record.format_line())
            .map_err(|e| SieveError::io("appending log record", e))
    }
}
