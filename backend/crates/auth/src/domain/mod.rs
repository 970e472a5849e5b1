//! Domain Layer
//!
//! Contains entities, value objects, domain services and the repository trait.

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

// Re-exports
pub use entity::{Claims, Identity, IdentityRecord, NewIdentity};
pub use repository::IdentityRepository;
pub use service::{Clock, TokenCodec, TokenResolver};
