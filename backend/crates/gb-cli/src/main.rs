//! gb - GST billing CLI
//!
//! Inspect role permissions and validate Indian tax identifiers.
//!
//! # Examples
//!
//! ```bash
//! # Permissions for a workforce user with a company selected
//! gb permissions --role workforce --company c-1 --pretty
//!
//! # Does an admin hold every one of these?
//! gb can --role admin --company c-1 --all canManageGST canDeleteVendor
//!
//! # Validate identifiers
//! gb pan ABCDE1234F
//! gb gstin 29ABCDE1234F1Z5 --registry https://gst.example.in
//! ```

use gb_cli::{Cli, CliError, CliResult, execute, logger};

use gb_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{Level, log_enabled};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match setup() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = execute(cli.command, &config, cli.registry.as_deref()).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration, then bring up logging.
fn setup() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(dir).map_err(|e| CliError::LogDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    if log_enabled!(Level::Debug) {
        config.log_summary();
    }

    Ok(config)
}
