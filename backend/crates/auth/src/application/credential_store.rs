//! Credential Store
//!
//! Registers identities and verifies passwords against them.
//!
//! Argon2 runs on the blocking pool and never under the repository lock:
//! hash first, then let the repository re-check uniqueness and insert in one
//! critical section. Login against an unknown user name still runs one
//! verification against a fixed decoy hash.

use std::sync::{Arc, OnceLock};

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::{Identity, NewIdentity};
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Credential store over any identity repository
pub struct CredentialStore<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> Clone for CredentialStore<R>
where
    R: IdentityRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> CredentialStore<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Register a new identity
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: String,
    ) -> AuthResult<Identity> {
        let user_name = UserName::new(username)?;
        let email = Email::new(email)?;
        let raw_password = RawPassword::new(password)?;

        // Cheap rejection before the expensive hash; `insert` re-checks
        self.repo.ensure_available(&user_name, &email).await?;

        let config = self.config.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, config.pepper())
        })
        .await??;

        let identity = self
            .repo
            .insert(NewIdentity {
                user_name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(
            user_id = %identity.id,
            user_name = %identity.user_name,
            "User registered"
        );

        Ok(identity)
    }

    /// Check a username / password pair
    ///
    /// Unknown user, malformed input and wrong password all fail with
    /// `InvalidCredentials`.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: String,
    ) -> AuthResult<Identity> {
        let user_name = UserName::new(username).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let (identity, password_hash) =
            match self.repo.find_record_by_user_name(&user_name).await? {
                Some(record) => (Some(record.identity), Some(record.password_hash)),
                None => (None, None),
            };

        let config = self.config.clone();
        let valid = tokio::task::spawn_blocking(move || {
            password_hash
                .as_ref()
                .or_else(|| decoy_hash())
                .is_some_and(|hash| hash.verify(&raw_password, config.pepper()))
        })
        .await?;

        match identity {
            Some(identity) if valid => Ok(identity),
            Some(identity) => {
                tracing::warn!(user_id = %identity.id, "Password mismatch");
                Err(AuthError::InvalidCredentials)
            }
            None => Err(AuthError::InvalidCredentials),
        }
    }

    /// Look up an identity by id
    pub async fn get_by_id(&self, id: &UserId) -> AuthResult<Identity> {
        self.repo.find_by_id(id).await?.ok_or(AuthError::NotFound)
    }
}

/// Hash verified in place of a missing user's, so both login paths cost one
/// Argon2 run
fn decoy_hash() -> Option<&'static UserPassword> {
    static DECOY: OnceLock<Option<UserPassword>> = OnceLock::new();
    DECOY
        .get_or_init(|| {
            RawPassword::new("decoy-password".to_string())
                .and_then(|raw| UserPassword::from_raw(&raw, None))
                .ok()
        })
        .as_ref()
}
