//! gb-cli library
//!
//! Command definitions and their execution, shared by the `gb` binary and
//! its integration tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod format_commands;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use format_commands::FormatCommands;
pub use runner::execute;
