// reader.rs - Read-side scan over a persisted log file

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

use crate::severity::Severity;

/// Collect the lines of `path` whose leading tag is exactly the name
/// of `level`.
///
/// The match is on the literal tag, not a priority comparison: reading
/// with ERROR yields only lines tagged `ERROR`, never WARNING-or-above.
/// A missing file means no log history yet and yields no lines.
pub fn read_filtered(path: impl AsRef<Path>, level: Severity) -> Vec<String> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                debug!(
                    message = "Log file unreadable, treating as empty",
                    path = %path.display(),
                    error = %e
                );
            }
            return Vec::new();
        }
    };

    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .filter(|line| line.split(' ').next() == Some(level.as_str()))
        .collect()
}
