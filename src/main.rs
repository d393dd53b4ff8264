//! Topic Explorer CLI
//!
//! Command-line interface for the research topic explorer.
//! Provides a one-shot search plus terminal and desktop front ends.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{HumanDuration, ProgressBar};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use topic_explorer::config::DEFAULT_SERVER_URL;
use topic_explorer::render::render;
use topic_explorer::{AppConfig, OutputFormat, SearchView, TrendsClient, TrendsSource};

/// Topic Explorer - browse research trends
///
/// Sends a keyword to the trends server and shows the matching
/// papers from arXiv, PubMed, DBLP and friends as a table.
#[derive(Parser)]
#[command(name = "topic-explorer")]
#[command(author = "Topic Explorer Contributors")]
#[command(version)]
#[command(about = "Research topic explorer", long_about = None)]
struct Cli {
    /// Base URL of the trends server
    #[arg(long, global = true, env = "TOPIC_EXPLORER_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Log file (default: topic-explorer.log next to the executable)
    #[arg(long, global = true, env = "TOPIC_EXPLORER_LOG")]
    log_file: Option<PathBuf>,

    /// Log debug messages too
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search {
        /// Keyword to search for (use -- before it if it starts with -)
        #[arg(allow_hyphen_values = true)]
        keyword: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive terminal UI (default)
    Tui {
        /// Pre-fill the keyword field
        #[arg(short, long, default_value = "")]
        keyword: String,
    },

    /// Desktop window
    Gui {
        /// Pre-fill the keyword field
        #[arg(short, long, default_value = "")]
        keyword: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = AppConfig::default()
        .with_log_file(cli.log_file.clone())
        .with_verbose(cli.verbose);

    // Initialize logging
    topic_explorer::logging::init(&config);
    topic_explorer::logging::separator("startup");
    log::info!(target: "MAIN", "Topic Explorer {} starting up", topic_explorer::VERSION);

    let result = config.with_server_url(&cli.server).and_then(|config| {
        match cli.command.unwrap_or(Commands::Tui {
            keyword: String::new(),
        }) {
            Commands::Search { keyword, format } => cmd_search(&config, &keyword, format),
            Commands::Tui { keyword } => cmd_tui(&config, &keyword),
            Commands::Gui { keyword } => cmd_gui(&config, &keyword),
        }
    });

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!(target: "MAIN", "{}", e);
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Search command implementation. Returns false when the search failed.
fn cmd_search(config: &AppConfig, keyword: &str, format: OutputFormat) -> topic_explorer::Result<bool> {
    let client = TrendsClient::new(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Searching {} for '{}'", client.trends_url(), keyword));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let start = Instant::now();

    let mut view = SearchView::new();
    view.set_keyword(keyword);
    view.run_search(&client);

    spinner.finish_and_clear();
    let elapsed = start.elapsed();

    if format == OutputFormat::Text {
        if let Some(message) = view.error() {
            eprintln!("{} {}", style("Error:").red().bold(), message);
            return Ok(false);
        }
        print!("{}", render(&view, format));
        println!();
        println!(
            "{} {} rows in {}",
            style("✓").green().bold(),
            style(view.rows().len()).cyan(),
            HumanDuration(elapsed)
        );
        return Ok(true);
    }

    println!("{}", render(&view, format));
    Ok(view.error().is_none())
}

fn cmd_tui(config: &AppConfig, keyword: &str) -> topic_explorer::Result<bool> {
    let client: Arc<dyn TrendsSource> = Arc::new(TrendsClient::new(config)?);
    topic_explorer::tui::run(client, keyword)?;
    Ok(true)
}

#[cfg(feature = "gui")]
fn cmd_gui(config: &AppConfig, keyword: &str) -> topic_explorer::Result<bool> {
    let client: Arc<dyn TrendsSource> = Arc::new(TrendsClient::new(config)?);
    topic_explorer::gui::run(client, keyword)?;
    Ok(true)
}

#[cfg(not(feature = "gui"))]
fn cmd_gui(_config: &AppConfig, _keyword: &str) -> topic_explorer::Result<bool> {
    Err(topic_explorer::ExplorerError::Config(
        "this build has no desktop window; rebuild with `--features gui`".to_string(),
    ))
}
