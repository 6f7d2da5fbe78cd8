use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use roster::background::{Clock, SystemClock};
use roster::commands::{self, injuries::InjuryOptions, list::ListOptions};
use roster::config::{self, Config};
use roster::data_provider::AthleteRepository;
use roster::filter::Selector;
use roster::injuries::InjuryMetric;
use roster::tui::{self, AppState};
use roster::view::{ViewMode, ViewState};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Squad availability dashboard", long_about = "Squad availability dashboard\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Roster dataset (JSON array of athletes); overrides data_file from the config
    #[arg(short = 'D', long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List athletes matching the filters
    List {
        /// Search first name, last name and position
        #[arg(short, long)]
        query: Option<String>,

        /// Exact squad name (every squad when omitted)
        #[arg(short, long)]
        squad: Option<String>,

        /// Exact position (every position when omitted)
        #[arg(short, long)]
        position: Option<String>,

        /// Availability status (available, injured, doubtful, unavailable), or "all"
        #[arg(short, long, default_value = "all")]
        availability: String,

        /// grid (flat list) or ladder (grouped by position group)
        #[arg(short, long)]
        view: Option<ViewMode>,

        /// Page to show in ladder view, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Athletes per group per page in ladder view
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show squads, positions and the position-group ladder
    Facets,
    /// Show availability counts and injury rates
    Summary,
    /// Show injury analytics by season and exposure type
    Injuries {
        /// counts, rates, time-loss or time-loss-rates
        #[arg(short, long, default_value = "counts")]
        metric: InjuryMetric,

        /// Season of a single bar to describe (with --category)
        #[arg(long, requires = "category")]
        season: Option<String>,

        /// Exposure category of a single bar to describe (with --season)
        #[arg(long, requires = "season")]
        category: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    match &cfg.data_file {
        Some(path) => println!("data_file: {}", path.display()),
        None => println!("data_file: (bundled roster)"),
    }
    match &cfg.injury_file {
        Some(path) => println!("injury_file: {}", path.display()),
        None => println!("injury_file: (bundled injury data)"),
    }
    println!("default_view: {}", cfg.default_view);
    println!("page_size: {}", cfg.page_size);
    println!("use_unicode: {}", cfg.use_unicode);
    println!("unmapped_label: {}", cfg.unmapped_label);
    println!();
    println!("[[position_groups]]");
    for group in &cfg.position_groups {
        println!("{}: {}", group.label, group.positions.join(", "));
    }
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("header_fg: {:?}", cfg.theme.header_fg);
    println!("available_fg: {:?}", cfg.theme.available_fg);
    println!("injured_fg: {:?}", cfg.theme.injured_fg);
    println!("doubtful_fg: {:?}", cfg.theme.doubtful_fg);
    println!("unavailable_fg: {:?}", cfg.theme.unavailable_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode with the refresh ticker
async fn run_tui_mode(repository: &dyn AthleteRepository, config: &Config) -> anyhow::Result<()> {
    let taxonomy = config.taxonomy().context("Invalid position_groups in config")?;
    let view = ViewState::mount(repository, taxonomy, config.view_settings())
        .context("Invalid page_size in config")?;

    let injuries = commands::load_injuries(config.injury_file.as_deref())?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = AppState::new(view, clock.now()).with_injuries(Arc::new(injuries));
    let refresh_interval = Duration::from_secs(u64::from(config.refresh_interval.max(1)));

    tui::run(state, config.display(), clock, refresh_interval)
        .await
        .context("Terminal UI failed")
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(repository: &dyn AthleteRepository, config: &Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::List { query, squad, position, availability, view, page, page_size } => {
            let options = ListOptions {
                query,
                squad: Selector::from(squad),
                position: Selector::from(position),
                availability: commands::parse_availability(&availability)?,
                view,
                page: page.saturating_sub(1),
                page_size,
            };
            commands::list::run(repository, config, options)
        }
        Commands::Facets => commands::facets::run(repository, config),
        Commands::Summary => commands::summary::run(repository, config),
        Commands::Injuries { metric, season, category } => {
            let insights = commands::load_injuries(config.injury_file.as_deref())?;
            let options = InjuryOptions {
                metric,
                bar: season.zip(category),
            };
            commands::injuries::run(&insights, config, options)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = match config::read().context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            // Log with the CLI settings alone; the config file is what failed
            if cli.log_file != DEFAULT_LOG_FILE {
                init_logging(&cli.log_level, &cli.log_file);
            }
            eprintln!("Error: {:#}", e);
            tracing::error!("Loading config failed: {:#}", e);
            std::process::exit(1);
        }
    };

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need the roster)
    if let Some(Commands::Config) = cli.command {
        handle_config_command(&config);
        return;
    }

    let data_file: Option<&Path> = cli.data.as_deref().or(config.data_file.as_deref());
    let repository = match commands::load_repository(data_file) {
        Ok(repository) => repository,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            tracing::error!("Loading roster failed: {:#}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        None => run_tui_mode(&repository, &config).await,
        Some(command) => execute_command(&repository, &config, command),
    };
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
