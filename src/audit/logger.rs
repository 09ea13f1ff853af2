//! Audit logger for the append-only audit log
//!
//! Each entry is written as a single JSON line with one append per entry.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as one JSON line
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|e| ExpenseError::Io(format!("Failed to append to audit log: {}", e)))?;

        tracing::trace!(operation = %entry.operation, id = %entry.expense_id, "audit entry written");
        Ok(())
    }

    /// Read all audit entries, oldest first
    ///
    /// A missing log file reads as empty. A line that is not a valid entry
    /// fails the whole read, naming the line number.
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ExpenseError::Io(format!("Failed to open audit log: {}", e))),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                ExpenseError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                ExpenseError::Json(format!("Bad audit entry at line {}: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries, oldest first
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of entries in the log
    pub fn entry_count(&self) -> ExpenseResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Path to the log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
