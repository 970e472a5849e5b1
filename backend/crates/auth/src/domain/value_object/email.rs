//! Email Value Object
//!
//! Kept exactly as submitted; uniqueness is exact string equality.
//! Deliverability and shape are never checked.

use kernel::error::app_error::{AppError, AppResult};

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Wrap a non-blank email
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(AppError::bad_request("email is required"));
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_kept_verbatim() {
        assert_eq!(Email::new("Bob@X.com").unwrap().as_str(), "Bob@X.com");
        assert_eq!(Email::new("a@x.com").unwrap().to_string(), "a@x.com");
        assert_ne!(Email::new("Bob@X.com").unwrap(), Email::new("bob@x.com").unwrap());
    }

    #[test]
    fn test_blank_email_is_rejected() {
        let err = Email::new("  ").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "email is required");
        assert!(Email::new("").is_err());
    }
}
