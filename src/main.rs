use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_cli::cli::{
    handle_add_command, handle_config_command, handle_delete_command, handle_export_command,
    handle_history_command, handle_list_command, handle_summary_command, handle_update_command,
    AddArgs, ConfigArgs, DeleteArgs, ExportArgs, HistoryArgs, ListArgs, SummaryArgs, UpdateArgs,
};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::storage::{needs_initialization, Storage};
use expense_cli::ExpenseResult;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based expense tracker",
    long_about = "expense records what you spend in a local SQLite database \
                  and answers simple questions about it: what did I spend, \
                  on what, and how much in a given month."
)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses
    ///
    /// The Date column is rendered with the `date_format` setting
    /// (default "%Y-%m-%d %H:%M:%S"); the database keeps full ISO-8601
    /// timestamps, which `export` writes unchanged.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Change the amount of an expense
    Update(UpdateArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show the total of all expenses, or of one month
    Summary(SummaryArgs),

    /// Export expenses as CSV or JSON
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::with_settings(paths, &settings)?;
    if needs_initialization(storage.paths())? {
        tracing::info!(
            path = %storage.paths().database_file().display(),
            "creating expense database"
        );
    }
    storage.initialize()?;

    match run(&storage, &settings, cli.command) {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            tracing::debug!(error = %e, "command rejected");
            println!("{}", e.user_message());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run(storage: &Storage, settings: &Settings, command: Commands) -> ExpenseResult<()> {
    match command {
        Commands::Add(args) => handle_add_command(storage, args),
        Commands::List(args) => handle_list_command(storage, settings, args),
        Commands::Update(args) => handle_update_command(storage, args),
        Commands::Delete(args) => handle_delete_command(storage, args),
        Commands::Summary(args) => handle_summary_command(storage, settings, args),
        Commands::Export(args) => handle_export_command(storage, args),
        Commands::History(args) => handle_history_command(storage, args),
        Commands::Config(args) => handle_config_command(storage, settings, args),
    }
}
