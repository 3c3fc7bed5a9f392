pub mod error;
pub mod format;
pub mod models;

pub use error::{CoreError, Result};
pub use format::{format_inr, format_percentage};
pub use models::capability::Capability;
pub use models::company::Company;
pub use models::role::Role;
pub use models::user_profile::UserProfile;

#[cfg(test)]
mod tests;
