pub mod permission_set;
pub mod user_context;

pub use permission_set::PermissionSet;
pub use user_context::UserContext;
