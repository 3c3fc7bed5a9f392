use gb_core::{Capability, Company, Role, UserProfile};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Capabilities granted to the current user.
///
/// Every [`Capability`] always has an explicit value, including when no user
/// or company is present. Derived on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet {
    flags: [bool; Capability::COUNT],
}

impl PermissionSet {
    /// Derive permissions from the signed-in profile and selected company.
    ///
    /// Without both, only the dashboard is visible.
    pub fn derive(profile: Option<&UserProfile>, company: Option<&Company>) -> Self {
        match (profile, company) {
            (Some(profile), Some(_)) => Self::for_role(profile.role, true),
            _ => Self::dashboard_only(),
        }
    }

    pub fn for_role(role: Role, company_present: bool) -> Self {
        if !company_present {
            return Self::dashboard_only();
        }

        let is_admin = role == Role::Admin;
        let is_workforce = role == Role::Workforce;
        let can_create = is_admin || is_workforce;

        let mut set = Self::dashboard_only();
        for capability in Capability::ALL {
            let granted = match capability {
                Capability::ViewDashboard => true,
                Capability::IsWorkforce => is_workforce,
                Capability::CreateInvoice | Capability::CreateCustomer => can_create,
                _ => is_admin,
            };
            set.flags[capability.index()] = granted;
        }
        set
    }

    /// The degraded set: everything denied except the dashboard.
    pub fn dashboard_only() -> Self {
        let mut flags = [false; Capability::COUNT];
        flags[Capability::ViewDashboard.index()] = true;
        Self { flags }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.flags[capability.index()]
    }

    pub fn allows_any(&self, capabilities: &[Capability]) -> bool {
        capabilities.iter().any(|c| self.allows(*c))
    }

    pub fn allows_all(&self, capabilities: &[Capability]) -> bool {
        capabilities.iter().all(|c| self.allows(*c))
    }

    /// Lookup by wire name (`canEditInvoice`, `isAdmin`, ...).
    /// Unknown names are denied.
    pub fn has_permission(&self, name: &str) -> bool {
        Capability::from_name(name).is_some_and(|c| self.allows(c))
    }

    /// False for an empty list.
    pub fn has_any_permission(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_permission(name))
    }

    /// True for an empty list.
    pub fn has_all_permissions(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.has_permission(name))
    }

    pub fn is_admin(&self) -> bool {
        self.allows(Capability::IsAdmin)
    }

    pub fn is_workforce(&self) -> bool {
        self.allows(Capability::IsWorkforce)
    }

    /// Granted capabilities in declaration order.
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.allows(*c))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Capability, bool)> + '_ {
        Capability::ALL.into_iter().map(|c| (c, self.allows(c)))
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::dashboard_only()
    }
}

impl Serialize for PermissionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.flags.len()))?;
        for (capability, granted) in self.iter() {
            map.serialize_entry(capability.name(), &granted)?;
        }
        map.end()
    }
}
