//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::crypto::SecretKey;

use crate::domain::service::token_codec::TokenCodec;
use crate::error::AuthResult;

/// Token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for token signatures (at least 32 bytes)
    pub token_secret: SecretKey,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create config from explicit key material
    pub fn new(secret: impl Into<Vec<u8>>) -> AuthResult<Self> {
        Ok(Self {
            token_secret: SecretKey::new(secret)?,
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        })
    }

    /// Create config with a random secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        Self {
            token_secret: SecretKey::generate(),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn with_password_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Token codec signing with this config's key and lifetime
    pub fn token_codec(&self) -> AuthResult<TokenCodec> {
        TokenCodec::new(self.token_secret.clone(), self.token_ttl)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &self.token_secret)
            .field("token_ttl", &self.token_ttl)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
