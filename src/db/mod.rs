//! Database layer (sled).

pub mod sled;

pub use self::sled::SledDb;

/// Tree names as constants.
pub mod trees {
    pub const USERS: &str = "users";
    /// Email -> user ID index, for uniqueness checks and login
    pub const USER_EMAILS: &str = "user_emails";
    pub const ACTIVITIES: &str = "activities";
    pub const REDEMPTIONS: &str = "redemptions";
    /// Holds the session pointer
    pub const META: &str = "meta";
}
