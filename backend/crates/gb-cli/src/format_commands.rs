use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum FormatCommands {
    /// Format an amount in rupees (e.g. 1234567.5 -> ₹12,34,567.50)
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Format a percentage (e.g. 18 -> 18.00%)
    Percent {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}
