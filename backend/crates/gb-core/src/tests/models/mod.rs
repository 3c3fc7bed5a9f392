mod capability;
mod role;
mod user_profile;
