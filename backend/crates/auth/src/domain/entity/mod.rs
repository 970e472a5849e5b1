//! Entities

pub mod claims;
pub mod identity;

pub use claims::Claims;
pub use identity::{Identity, IdentityRecord, NewIdentity};
