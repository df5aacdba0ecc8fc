use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tenji_cli::commands::{classify, filter, validate};
use tenji_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let load_config = || -> Result<Config> {
        let config =
            Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    };

    match &cli.command {
        Some(Commands::Filter {
            input,
            range,
            prefecture,
            venue_type,
            today,
            badges,
        }) => {
            let config = load_config()?;
            filter::run(
                &config,
                input,
                range.as_deref(),
                prefecture.as_deref(),
                venue_type.as_deref(),
                *today,
                *badges,
            )?;
        }
        Some(Commands::Classify {
            venue,
            title,
            host,
            json,
        }) => {
            let config = load_config()?;
            classify::run(&config, venue, title.as_deref(), host.as_deref(), *json)?;
        }
        Some(Commands::Validate { input }) => {
            validate::run(input)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
