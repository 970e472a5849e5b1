//! Repository Traits
//!
//! Interface for identity persistence. Implementation is in infrastructure layer.

use crate::domain::entity::identity::{Identity, IdentityRecord, NewIdentity};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// Identity repository trait
///
/// Implementations own the uniqueness invariant: at most one identity per
/// user name and per email, ids unique and never reused.
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Fail with `DuplicateUsername` / `DuplicateEmail` if either is taken
    ///
    /// Advisory only: lets callers skip expensive work for obvious conflicts.
    async fn ensure_available(&self, user_name: &UserName, email: &Email) -> AuthResult<()>;

    /// Re-check uniqueness, allocate an id and insert, as one atomic step
    async fn insert(&self, new_identity: NewIdentity) -> AuthResult<Identity>;

    /// Find identity by ID
    async fn find_by_id(&self, id: &UserId) -> AuthResult<Option<Identity>>;

    /// Find identity and password hash by user name
    async fn find_record_by_user_name(
        &self,
        user_name: &UserName,
    ) -> AuthResult<Option<IdentityRecord>>;

    /// Number of registered identities
    async fn count(&self) -> AuthResult<usize>;
}
