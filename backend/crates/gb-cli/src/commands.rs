use crate::FormatCommands;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full permission set for a role
    Permissions {
        /// Role as supplied by the auth provider (admin, workforce, ...)
        #[arg(long)]
        role: Option<String>,
        /// Selected company ID; omit to simulate no company context
        #[arg(long)]
        company: Option<String>,
    },

    /// Check whether a role holds the given capabilities
    Can {
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        company: Option<String>,
        /// Require every capability instead of any one
        #[arg(long)]
        all: bool,
        /// Capability names (canCreateInvoice, isAdmin, ...). Unknown names count as not held
        capabilities: Vec<String>,
    },

    /// Validate a PAN
    Pan { pan: String },

    /// Validate a GSTIN and look it up in the GST registry
    Gstin { gstin: String },

    /// Display formatting
    Format {
        #[command(subcommand)]
        action: FormatCommands,
    },
}
