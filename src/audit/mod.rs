//! Audit logging for expense-cli
//!
//! Records every create, update and delete of an expense in an append-only
//! audit log next to the database.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, the
//!   affected expense and its before/after values.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back for the `history` command.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
