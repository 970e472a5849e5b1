//! In-Memory Repository Implementation
//!
//! Primary map keyed by id plus two secondary indexes (user name, email),
//! both matched exactly. All three and the id sequence sit behind one
//! mutex, so the uniqueness check and the insert form a single critical
//! section.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use crate::domain::entity::identity::{Identity, IdentityRecord, NewIdentity};
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::{UserId, UserIdSequence, user_id_sequence},
    user_name::UserName,
};
use crate::error::{AuthError, AuthResult};

struct StoreState {
    by_id: HashMap<UserId, IdentityRecord>,
    by_user_name: HashMap<String, UserId>,
    by_email: HashMap<String, UserId>,
    ids: UserIdSequence,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            by_user_name: HashMap::new(),
            by_email: HashMap::new(),
            ids: user_id_sequence(),
        }
    }
}

impl StoreState {
    fn check_available(&self, user_name: &UserName, email: &Email) -> AuthResult<()> {
        if self.by_user_name.contains_key(user_name.as_str()) {
            return Err(AuthError::DuplicateUsername);
        }
        if self.by_email.contains_key(email.as_str()) {
            return Err(AuthError::DuplicateEmail);
        }
        Ok(())
    }
}

/// Process-local identity store
///
/// Cloning shares the same underlying state.
#[derive(Clone, Default)]
pub struct InMemoryIdentityRepository {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityRepository for InMemoryIdentityRepository {
    async fn ensure_available(&self, user_name: &UserName, email: &Email) -> AuthResult<()> {
        self.state.lock().check_available(user_name, email)
    }

    async fn insert(&self, new_identity: NewIdentity) -> AuthResult<Identity> {
        let mut state = self.state.lock();

        state.check_available(&new_identity.user_name, &new_identity.email)?;

        let id = state.ids.next_id();
        let record = new_identity.into_record(id.clone(), Utc::now());
        let identity = record.identity.clone();

        state
            .by_user_name
            .insert(identity.user_name.as_str().to_string(), id.clone());
        state
            .by_email
            .insert(identity.email.as_str().to_string(), id.clone());
        state.by_id.insert(id, record);

        Ok(identity)
    }

    async fn find_by_id(&self, id: &UserId) -> AuthResult<Option<Identity>> {
        Ok(self
            .state
            .lock()
            .by_id
            .get(id)
            .map(|record| record.identity.clone()))
    }

    async fn find_record_by_user_name(
        &self,
        user_name: &UserName,
    ) -> AuthResult<Option<IdentityRecord>> {
        let state = self.state.lock();
        Ok(state
            .by_user_name
            .get(user_name.as_str())
            .and_then(|id| state.by_id.get(id))
            .cloned())
    }

    async fn count(&self) -> AuthResult<usize> {
        Ok(self.state.lock().by_id.len())
    }
}
