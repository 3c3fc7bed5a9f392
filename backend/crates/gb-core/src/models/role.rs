use serde::{Deserialize, Serialize};

/// Role assigned to a user within a company.
///
/// Roles arrive as free-form strings from the identity provider. Anything
/// that is not an exact match for a known role becomes [`Role::Other`], which
/// grants nothing beyond the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Workforce,
    #[default]
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Workforce => "workforce",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            "workforce" => Self::Workforce,
            _ => Self::Other,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
