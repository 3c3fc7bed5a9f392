use crate::Commands;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "gb")]
#[command(about = "GST billing permission and tax-identifier checks")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// GST registry URL (overrides gst_registry.base_url from config)
    #[arg(long, global = true)]
    pub registry: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
