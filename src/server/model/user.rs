//! User domain models and the sentinel identity.
//!
//! There are no visitor accounts. Every comment is attributed to a single pre-seeded
//! row, `ANONYMOUS_USER`, which the comment workflow upserts in the same transaction as
//! the comment itself.

/// A fixed identity that must exist before rows referencing it are committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelUser {
    pub id: i32,
    pub username: &'static str,
    pub email: &'static str,
}

/// Author of every comment. Shares its values with the seed migration.
pub const ANONYMOUS_USER: SentinelUser = SentinelUser {
    id: migration::ANONYMOUS_USER_ID,
    username: migration::ANONYMOUS_USERNAME,
    email: migration::ANONYMOUS_EMAIL,
};

/// Stored user row.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
        }
    }
}
