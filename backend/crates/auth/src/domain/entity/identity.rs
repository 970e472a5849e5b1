//! Identity Entity
//!
//! A registered user's durable record. The password hash lives beside it in
//! [`IdentityRecord`] and never travels with the public [`Identity`].

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// Registered identity, safe to hand to callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque, stable identifier (`user_<n>`)
    pub id: UserId,
    /// Unique user name, exactly as registered
    pub user_name: UserName,
    /// Unique email, exactly as registered
    pub email: Email,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

/// Validated registration data whose password has already been hashed
///
/// The store assigns the id at insertion time.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
}

impl NewIdentity {
    /// Attach the allocated id
    pub fn into_record(self, id: UserId, created_at: DateTime<Utc>) -> IdentityRecord {
        IdentityRecord {
            identity: Identity {
                id,
                user_name: self.user_name,
                email: self.email,
                created_at,
            },
            password_hash: self.password_hash,
        }
    }
}

/// Identity together with its password hash, as held by the store
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    pub identity: Identity,
    pub password_hash: UserPassword,
}
