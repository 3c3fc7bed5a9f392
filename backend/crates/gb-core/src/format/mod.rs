//! Display formatting for amounts shown on invoices and reports.

mod currency;
mod percentage;

pub use currency::format_inr;
pub use percentage::format_percentage;
