pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use wardrobe_core::config::{AppConfig, LoadOptions, LogFormat};

#[derive(Debug, Parser)]
#[command(
    name = "wardrobe",
    about = "Wardrobe operator CLI",
    long_about = "Run outfit recommendations, inspect catalogs, and review effective configuration.",
    after_help = "Examples:\n  wardrobe recommend --weather today.json\n  wardrobe catalog\n  wardrobe config"
)]
pub struct Cli {
    /// Configuration file (defaults to wardrobe.toml / config/wardrobe.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Recommend an outfit for the given weather and preferences")]
    Recommend {
        #[arg(long, help = "Weather conditions file (.json or .toml)")]
        weather: PathBuf,
        #[arg(long, help = "Style preferences file (.json or .toml); defaults when omitted")]
        preferences: Option<PathBuf>,
        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,
    },
    #[command(about = "Validate and summarize the active catalog")]
    Catalog {
        #[arg(long, help = "Catalog file to inspect instead of the configured one")]
        path: Option<PathBuf>,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
}

fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions {
        config_path: cli.config.clone(),
        ..Default::default()
    }) {
        Ok(config) => config,
        Err(error) => {
            let result = commands::CommandResult::failure(
                "config",
                "config_validation",
                error.to_string(),
                2,
            );
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };

    init_logging(&config);

    let result = match cli.command {
        Command::Recommend { weather, preferences, pretty } => {
            commands::recommend::run(&config, &weather, preferences.as_deref(), pretty)
        }
        Command::Catalog { path } => commands::catalog::run(&config, path.as_deref()),
        Command::Config => commands::CommandResult {
            exit_code: 0,
            output: commands::config::run(cli.config.as_deref()),
        },
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
