//! Launchpad CLI
//!
//! Preview and reference agents, commands, skills, and plans from the
//! command line.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use launchpad_cli::commands::{cmd_copy, cmd_describe, cmd_parse};
use launchpad_cli::config_handlers::handle_config_command;
use launchpad_cli::logging::init_logging;
use launchpad_cli::{Args, Command, LaunchpadConfig};

/// Load configuration and install logging with its level.
fn setup(config_path: Option<&str>, verbose: bool) -> Result<LaunchpadConfig> {
    let config = LaunchpadConfig::load(config_path)?;
    init_logging(&config.log_level, verbose);
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.as_deref();

    let output = match args.command {
        // Config commands must work even when the config file is broken.
        Command::Config { action } => {
            init_logging("warn", args.verbose);
            handle_config_command(config_path, &action)?
        }
        Command::Parse { file, format } => {
            let config = setup(config_path, args.verbose)?;
            let format = format.map(Into::into).unwrap_or(config.output);
            cmd_parse(&file, format).await?
        }
        Command::Describe { file } => {
            setup(config_path, args.verbose)?;
            cmd_describe(&file).await?
        }
        Command::Copy {
            catalog,
            project_root,
            ids,
        } => {
            let config = setup(config_path, args.verbose)?;
            let root = config.project_root_with(project_root.as_deref());
            cmd_copy(&catalog, root, &ids).await?
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
