use crate::Role;

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as supplied by the auth provider.
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl UserProfile {
    pub fn new(role: Role, company_id: Option<&str>) -> Self {
        Self {
            role,
            company_id: company_id.map(String::from),
        }
    }
}
