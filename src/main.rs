mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventsite")]
#[command(about = "Preview the events page of your site from its events dataset")]
struct Cli {
    /// Events dataset (defaults to `dataset` from config.toml)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD, defaults to the local date)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List today's and upcoming events
    Events {
        /// Only show events in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show a month calendar with links to the archive pages
    Calendar {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Move this many months forward
        #[arg(long, default_value_t = 0)]
        next: u32,

        /// Move this many months back
        #[arg(long, default_value_t = 0)]
        prev: u32,
    },
    /// List the categories of today's and upcoming events
    Categories,
    /// Show event and category counts
    Stats,
    /// Render the events page as a standalone HTML file
    Page {
        /// Select this category filter
        #[arg(short, long)]
        category: Option<String>,

        /// Show this month in the calendar (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = config::load_config()?;
    let dataset = cli.dataset.unwrap_or_else(|| cfg.dataset_path());
    let today = commands::resolve_today(cli.today.as_deref())?;
    let store = commands::load_store(&dataset).await?;

    match cli.command {
        Commands::Events { category } => {
            let selection = commands::selection_from_arg(category.as_deref());
            commands::events::run(&store, today, selection)
        }
        Commands::Calendar { month, next, prev } => {
            commands::calendar::run(&store, today, month.as_deref(), next, prev)
        }
        Commands::Categories => commands::categories::run(&store, today),
        Commands::Stats => commands::stats::run(&store, today),
        Commands::Page {
            category,
            month,
            output,
        } => {
            let selection = commands::selection_from_arg(category.as_deref());
            commands::page::run(
                store,
                today,
                month.as_deref(),
                selection,
                &cfg.page_title,
                output.as_deref(),
            )
        }
    }
}
