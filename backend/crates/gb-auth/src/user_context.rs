use crate::PermissionSet;

use gb_core::{Company, Role, UserProfile};

/// Signed-in user and selected company, as handed over by the auth provider.
/// Either side may be missing while a session is still loading.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub profile: Option<UserProfile>,
    pub company: Option<Company>,
}

impl UserContext {
    pub fn new(profile: Option<UserProfile>, company: Option<Company>) -> Self {
        Self { profile, company }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }

    pub fn permissions(&self) -> PermissionSet {
        PermissionSet::derive(self.profile.as_ref(), self.company.as_ref())
    }
}
