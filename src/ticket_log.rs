use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::{RError, RResult};

/// Append-only destination of ticket records, one line per purchase.
pub trait TicketLog: Display {
    fn append(&mut self, record: &str) -> RResult<()>;
}

// ------------------------------------------------------------------------------------------------
// --- FileTicketLog
// ------------------------------------------------------------------------------------------------

/// Ticket log backed by a text file. The file is opened in append mode, written and closed
/// again for every record, so no handle is held between purchases.
#[derive(Debug, Clone)]
pub struct FileTicketLog {
    path: PathBuf,
}

impl FileTicketLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TicketLog for FileTicketLog {
    fn append(&mut self, record: &str) -> RResult<()> {
        let failure = |source: std::io::Error| RError::LogWriteFailure {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(failure)?;
        // The whole line goes out in a single write.
        file.write_all(format!("{record}\n").as_bytes())
            .map_err(failure)?;

        log::debug!("Record appended to {}", self.path.display());
        Ok(())
    }
}

impl Display for FileTicketLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
