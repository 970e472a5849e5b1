//! User Name Value Object
//!
//! ユーザー名はログインと表示に使う公開ハンドル。
//!
//! ## 設計方針
//! - 入力をそのまま保持する（正規化・大小文字変換なし）
//! - 一意性とログイン照合は完全一致で判定する
//!
//! ## 不変条件
//! - 空文字列・空白のみは不可

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// User name exactly as registered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl Into<String>) -> AppResult<Self> {
        let name = input.into();
        if name.trim().is_empty() {
            return Err(AppError::bad_request("username is required"));
        }
        Ok(Self(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kept_verbatim() {
        for name in ["alice", "Alice", "al", "john doe", "名前", " padded "] {
            assert_eq!(UserName::new(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_exact_equality() {
        assert_ne!(UserName::new("alice").unwrap(), UserName::new("Alice").unwrap());
        assert_eq!(UserName::new("alice").unwrap(), UserName::new("alice").unwrap());
    }

    #[test]
    fn test_blank_is_rejected() {
        for name in ["", "   ", "\t"] {
            let err = UserName::new(name).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.message(), "username is required");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(UserName::new("Alice").unwrap().to_string(), "Alice");
    }
}
