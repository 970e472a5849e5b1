//! Auth Orchestrator
//!
//! Composes the credential store and the token codec into the register,
//! login and resolve flows the transport layer calls.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credential_store::CredentialStore;
use crate::domain::entity::{claims::Claims, identity::Identity};
use crate::domain::repository::IdentityRepository;
use crate::domain::service::{Clock, TokenCodec, TokenResolver};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    pub identity: Identity,
}

pub struct AuthOrchestrator<R>
where
    R: IdentityRepository,
{
    store: CredentialStore<R>,
    codec: TokenCodec,
}

impl<R> Clone for AuthOrchestrator<R>
where
    R: IdentityRepository,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            codec: self.codec.clone(),
        }
    }
}

impl<R> AuthOrchestrator<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: AuthConfig) -> AuthResult<Self> {
        let codec = config.token_codec()?;
        Ok(Self {
            store: CredentialStore::new(repo, Arc::new(config)),
            codec,
        })
    }

    /// Replace the codec's time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.codec = self.codec.with_clock(clock);
        self
    }

    pub fn store(&self) -> &CredentialStore<R> {
        &self.store
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Register a new identity; store failures pass through unchanged
    pub async fn register(&self, input: RegisterInput) -> AuthResult<Identity> {
        self.store
            .register(&input.username, &input.email, input.password)
            .await
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let identity = match self
            .store
            .verify_credentials(&input.username, input.password)
            .await
        {
            Ok(identity) => identity,
            Err(e) => {
                if !matches!(e, AuthError::InvalidCredentials) {
                    tracing::error!(error = %e, "Credential check failed");
                }
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.codec.issue(
            identity.id.as_str(),
            identity.user_name.as_str(),
            identity.email.as_str(),
        )?;

        tracing::info!(
            user_id = %identity.id,
            user_name = %identity.user_name,
            "User logged in"
        );

        Ok(LoginOutput { token, identity })
    }

    /// Validate a bearer token
    pub fn resolve(&self, token: &str) -> AuthResult<Claims> {
        self.codec.validate(token)
    }

    /// Current identity behind a set of claims
    pub async fn get_profile(&self, claims: &Claims) -> AuthResult<Identity> {
        self.store.get_by_id(&claims.subject()).await
    }
}

impl<R> TokenResolver for AuthOrchestrator<R>
where
    R: IdentityRepository + Sync,
{
    fn resolve(&self, token: &str) -> AuthResult<Claims> {
        AuthOrchestrator::resolve(self, token)
    }
}
