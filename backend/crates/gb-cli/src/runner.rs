use crate::{CliResult, Commands, FormatCommands};

use gb_auth::UserContext;
use gb_config::Config;
use gb_core::{Company, Role, UserProfile, format_inr, format_percentage};
use gb_gst::{GstinValidator, HttpGstRegistry, validate_pan};

use log::debug;
use serde_json::{Value, json};

/// Run one command and return the JSON to print.
///
/// Validation failures are data in the returned JSON, not errors. Only
/// setup problems (such as an unusable registry client) return `Err`.
pub async fn execute(
    command: Commands,
    config: &Config,
    registry_override: Option<&str>,
) -> CliResult<Value> {
    match command {
        Commands::Permissions { role, company } => {
            let context = user_context(role.as_deref(), company.as_deref());
            Ok(serde_json::to_value(context.permissions())?)
        }

        Commands::Can {
            role,
            company,
            all,
            capabilities,
        } => {
            let permissions = user_context(role.as_deref(), company.as_deref()).permissions();
            let names: Vec<&str> = capabilities.iter().map(String::as_str).collect();
            let allowed = if all {
                permissions.has_all_permissions(&names)
            } else {
                permissions.has_any_permission(&names)
            };
            Ok(json!({ "allowed": allowed }))
        }

        Commands::Pan { pan } => Ok(serde_json::to_value(validate_pan(&pan))?),

        Commands::Gstin { gstin } => {
            let base_url = registry_override.unwrap_or(&config.gst_registry.base_url);
            debug!("Using GST registry at {}", base_url);

            let registry = HttpGstRegistry::new(
                base_url,
                config.gst_registry.api_key.as_deref(),
                config.gst_registry.timeout(),
            )?;
            let validator = GstinValidator::new(registry);

            Ok(serde_json::to_value(validator.validate_gstin(&gstin).await)?)
        }

        Commands::Format { action } => {
            let formatted = match action {
                FormatCommands::Currency { amount } => format_inr(amount),
                FormatCommands::Percent { value } => format_percentage(value),
            };
            Ok(json!({ "formatted": formatted }))
        }
    }
}

fn user_context(role: Option<&str>, company: Option<&str>) -> UserContext {
    UserContext::new(
        role.map(|r| UserProfile::new(Role::parse(r), company)),
        company.map(Company::new),
    )
}
