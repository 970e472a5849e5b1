//! Token Claims
//!
//! The signed payload of a bearer token. Field order and names are part of
//! the wire format: `{"user_id","username","email","iat","exp"}`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Token claims (immutable once issued)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "user_id")]
    pub subject_id: String,
    pub username: String,
    pub email: String,
    /// Issue time, Unix seconds
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expiry time, Unix seconds
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    /// Claims valid from `now` until `now + ttl`
    ///
    /// Fails with `Configuration` when the expiry is past the representable
    /// date range.
    pub fn new(
        subject_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> AuthResult<Self> {
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            AuthError::Configuration(format!("Token TTL of {ttl} overflows the clock"))
        })?;

        Ok(Self {
            subject_id: subject_id.into(),
            username: username.into(),
            email: email.into(),
            issued_at: now.timestamp(),
            expires_at: expires_at.timestamp(),
        })
    }

    /// Expired strictly after `expires_at`; the expiry second itself is still valid
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.expires_at
    }

    pub fn subject(&self) -> UserId {
        UserId::from_string(self.subject_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_window_from_ttl() {
        let claims = Claims::new("user_1", "alice", "a@x.com", at(1_000), Duration::hours(24)).unwrap();
        assert_eq!(claims.issued_at, 1_000);
        assert_eq!(claims.expires_at, 1_000 + 86_400);
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims::new("user_1", "alice", "a@x.com", at(0), Duration::seconds(10)).unwrap();
        assert!(!claims.is_expired_at(at(10)));
        assert!(claims.is_expired_at(at(11)));
    }

    #[test]
    fn test_wire_field_names_and_order() {
        let claims = Claims::new("user_1", "alice", "a@x.com", at(5), Duration::seconds(1)).unwrap();
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(
            json,
            r#"{"user_id":"user_1","username":"alice","email":"a@x.com","iat":5,"exp":6}"#
        );
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"user_id":"user_1","username":"alice","iat":5,"exp":6}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_overflowing_ttl_is_an_error() {
        let err = Claims::new("user_1", "alice", "a@x.com", at(0), Duration::MAX).unwrap_err();
        assert!(matches!(err, AuthError::Configuration(_)));

        let err = Claims::new("user_1", "alice", "a@x.com", DateTime::<Utc>::MAX_UTC, Duration::seconds(1))
            .unwrap_err();
        assert!(matches!(err, AuthError::Configuration(_)));
    }
}
