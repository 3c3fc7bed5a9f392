pub mod capability;
pub mod company;
pub mod role;
pub mod user_profile;
