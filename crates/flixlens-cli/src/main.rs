use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{analyze, config};
use flixlens_config::{Config, PathManager};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "flixlens")]
#[command(about = "FlixLens - See where your streaming hours go")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze viewing activity and search history exports
    #[command(long_about = "Parse a viewing-activity CSV export, and optionally a search-history export, then print the dashboard: headline metrics, monthly trend, genre and device breakdowns, top titles, the weekly heatmap, daily and hourly distributions, search statistics and insights.")]
    Analyze {
        /// Viewing activity CSV export
        #[arg(long, value_name = "PATH")]
        viewing: Option<PathBuf>,

        /// Search history CSV export
        #[arg(long, value_name = "PATH")]
        search: Option<PathBuf>,

        /// Start from the bundled sample exports; files given with --viewing or --search replace them
        #[arg(long, action = ArgAction::SetTrue)]
        sample: bool,

        /// Number of top titles to show (overrides the configured limit)
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::new().map_err(|e| eyre!("{}", e))?;
    let config_file = paths.config_file();
    // A broken config file must not block rewriting it or locating it
    let settings = match (&cli.command, Config::load_or_default(&config_file)) {
        (_, Ok(settings)) => settings,
        (
            Commands::Config {
                cmd: ConfigCommands::Init { .. } | ConfigCommands::Path,
            },
            Err(_),
        ) => Config::default(),
        (_, Err(e)) => return Err(eyre!("Failed to load config from {}: {}", config_file.display(), e)),
    };

    logging::init_logging(cli.verbose, cli.quiet, settings.logging.file.as_deref()).map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Analyze {
            viewing,
            search,
            sample,
            top,
        } => {
            let request = analyze::AnalyzeRequest {
                viewing,
                search,
                sample,
                top,
            };
            analyze::run_analyze(request, &settings, &output)
        }
        Commands::Config { cmd } => config::run_config(cmd, &settings, &paths, &output),
    }
}
