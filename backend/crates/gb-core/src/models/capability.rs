use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A named permission flag consumed by UI gating logic.
///
/// Wire names are camelCase to match what the rendering layer checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    #[serde(rename = "canCreateInvoice")]
    CreateInvoice,
    #[serde(rename = "canEditInvoice")]
    EditInvoice,
    #[serde(rename = "canDeleteInvoice")]
    DeleteInvoice,
    #[serde(rename = "canViewReports")]
    ViewReports,
    #[serde(rename = "canManageUsers")]
    ManageUsers,
    #[serde(rename = "canManageCompany")]
    ManageCompany,
    #[serde(rename = "canAccessAccounting")]
    AccessAccounting,
    #[serde(rename = "canManageInventory")]
    ManageInventory,
    #[serde(rename = "canCreateCustomer")]
    CreateCustomer,
    #[serde(rename = "canEditCustomer")]
    EditCustomer,
    #[serde(rename = "canDeleteCustomer")]
    DeleteCustomer,
    #[serde(rename = "canCreateVendor")]
    CreateVendor,
    #[serde(rename = "canEditVendor")]
    EditVendor,
    #[serde(rename = "canDeleteVendor")]
    DeleteVendor,
    #[serde(rename = "canManageGST")]
    ManageGst,
    #[serde(rename = "canViewDashboard")]
    ViewDashboard,
    #[serde(rename = "isAdmin")]
    IsAdmin,
    #[serde(rename = "isWorkforce")]
    IsWorkforce,
}

impl Capability {
    pub const COUNT: usize = 18;

    /// Every capability, in declaration order.
    pub const ALL: [Capability; Self::COUNT] = [
        Self::CreateInvoice,
        Self::EditInvoice,
        Self::DeleteInvoice,
        Self::ViewReports,
        Self::ManageUsers,
        Self::ManageCompany,
        Self::AccessAccounting,
        Self::ManageInventory,
        Self::CreateCustomer,
        Self::EditCustomer,
        Self::DeleteCustomer,
        Self::CreateVendor,
        Self::EditVendor,
        Self::DeleteVendor,
        Self::ManageGst,
        Self::ViewDashboard,
        Self::IsAdmin,
        Self::IsWorkforce,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateInvoice => "canCreateInvoice",
            Self::EditInvoice => "canEditInvoice",
            Self::DeleteInvoice => "canDeleteInvoice",
            Self::ViewReports => "canViewReports",
            Self::ManageUsers => "canManageUsers",
            Self::ManageCompany => "canManageCompany",
            Self::AccessAccounting => "canAccessAccounting",
            Self::ManageInventory => "canManageInventory",
            Self::CreateCustomer => "canCreateCustomer",
            Self::EditCustomer => "canEditCustomer",
            Self::DeleteCustomer => "canDeleteCustomer",
            Self::CreateVendor => "canCreateVendor",
            Self::EditVendor => "canEditVendor",
            Self::DeleteVendor => "canDeleteVendor",
            Self::ManageGst => "canManageGST",
            Self::ViewDashboard => "canViewDashboard",
            Self::IsAdmin => "isAdmin",
            Self::IsWorkforce => "isWorkforce",
        }
    }

    /// Look up a capability by wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Position of this capability in [`Capability::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Capability {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::from_name(s).ok_or_else(|| CoreError::InvalidCapability {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
