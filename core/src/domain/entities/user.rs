//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account, keyed by a service-generated UUID.
///
/// Email is unique across the store. The password is only ever held as a
/// bcrypt hash; the plaintext never leaves the signup/login/update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address (unique, stored case-sensitively)
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh UUID
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_distinct_ids() {
        let a = User::new("a@campus.edu", "hash");
        let b = User::new("b@campus.edu", "hash");
        assert_ne!(a.id, b.id);
        assert_eq!(a.email, "a@campus.edu");
    }
}
