//! Token Codec
//!
//! Issues and validates stateless bearer tokens:
//!
//! ```text
//! base64url(JSON(claims)) "." base64url(HMAC-SHA256(secret, payload_segment))
//! ```
//!
//! Both segments use the padded URL-safe alphabet. The codec holds only the
//! immutable key, the token lifetime and a clock, so it is freely shared
//! across tasks without locking.

use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use kernel::error::app_error::AppError;
use platform::crypto::{self, SecretKey};

use crate::domain::entity::claims::Claims;
use crate::domain::service::TokenResolver;
use crate::domain::service::clock::{Clock, SystemClock};
use crate::error::{AuthError, AuthResult};

/// Segment separator
const SEPARATOR: char = '.';

#[derive(Clone)]
pub struct TokenCodec {
    secret: Arc<SecretKey>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(secret: SecretKey, ttl: std::time::Duration) -> AuthResult<Self> {
        let ttl = Duration::from_std(ttl)
            .map_err(|e| AuthError::Configuration(format!("Invalid token TTL: {e}")))?;

        Ok(Self {
            secret: Arc::new(secret),
            ttl,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token valid from now until now + TTL
    pub fn issue(&self, subject_id: &str, username: &str, email: &str) -> AuthResult<String> {
        let claims = Claims::new(subject_id, username, email, self.clock.now(), self.ttl)?;
        self.encode(&claims)
    }

    /// Sign an explicit claims record
    pub fn encode(&self, claims: &Claims) -> AuthResult<String> {
        let json = serde_json::to_vec(claims).map_err(AppError::from)?;
        let payload = crypto::to_base64url(&json);
        let signature = self.sign(&payload);

        Ok(format!("{payload}{SEPARATOR}{signature}"))
    }

    /// Validate a token and return its claims
    ///
    /// The signature is checked before the payload is decoded, so nothing
    /// unauthenticated is ever parsed.
    pub fn validate(&self, token: &str) -> AuthResult<Claims> {
        let mut segments = token.split(SEPARATOR);
        let (Some(payload), Some(signature), None) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(AuthError::MalformedToken);
        };

        let expected = self.sign(payload);
        if !crypto::constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
            return Err(AuthError::InvalidSignature);
        }

        let json = crypto::from_base64url(payload).map_err(|_| AuthError::InvalidEncoding)?;

        let claims: Claims =
            serde_json::from_slice(&json).map_err(|_| AuthError::InvalidClaims)?;

        if claims.is_expired_at(self.clock.now()) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    fn sign(&self, payload_segment: &str) -> String {
        crypto::to_base64url(&crypto::hmac_sha256(&self.secret, payload_segment.as_bytes()))
    }
}

impl TokenResolver for TokenCodec {
    fn resolve(&self, token: &str) -> AuthResult<Claims> {
        self.validate(token)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &self.secret)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
