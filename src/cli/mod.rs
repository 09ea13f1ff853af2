//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod expense;
pub mod export;
pub mod history;
pub mod summary;

pub use config::{handle_config_command, ConfigArgs};
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_update_command,
    AddArgs, DeleteArgs, ListArgs, UpdateArgs,
};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::{handle_history_command, HistoryArgs};
pub use summary::{handle_summary_command, SummaryArgs};
