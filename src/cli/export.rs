//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per expense
    Csv,
    /// Every expense plus count and total
    Json,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path, or "-" for stdout
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let to_stdout = args.output.as_os_str() == "-";

    let mut writer: Box<dyn Write> = if to_stdout {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(&args.output).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to create file {}: {}",
                args.output.display(),
                e
            ))
        })?;
        Box::new(BufWriter::new(file))
    };

    let count = match args.format {
        ExportFormat::Csv => export_expenses_csv(storage, &mut writer)?,
        ExportFormat::Json => export_expenses_json(storage, &mut writer, args.pretty)?,
    };
    writer.flush()?;

    if !to_stdout {
        println!("Exported {} expenses to: {}", count, args.output.display());
    }

    Ok(())
}
