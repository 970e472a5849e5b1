//! Cryptographic Utilities

use std::fmt;

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum MAC key length in bytes (the SHA-256 output size)
pub const MIN_SECRET_KEY_LEN: usize = 32;

/// Secret key rejection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretKeyError {
    #[error("Secret key must be at least {min} bytes (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// HMAC key material
///
/// Zeroized on drop; `Debug` output is redacted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap key material, rejecting anything shorter than [`MIN_SECRET_KEY_LEN`]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SecretKeyError> {
        let bytes = bytes.into();
        if bytes.len() < MIN_SECRET_KEY_LEN {
            return Err(SecretKeyError::TooShort {
                min: MIN_SECRET_KEY_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    /// Random key from the OS RNG (for development and tests)
    pub fn generate() -> Self {
        Self(random_bytes(MIN_SECRET_KEY_LEN))
    }

    fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretKey").field(&"[REDACTED]").finish()
    }
}

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &SecretKey, data: &[u8]) -> [u8; 32] {
    let mut mac = Hmac::<Sha256>::new_from_slice(key.expose())
        .expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Encode bytes as padded URL-safe base64
pub fn to_base64url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE.encode(bytes)
}

/// Decode padded URL-safe base64
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE.decode(s)
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_length() {
        assert_eq!(
            SecretKey::new(vec![1u8; 31]).unwrap_err(),
            SecretKeyError::TooShort { min: 32, actual: 31 }
        );
        assert!(SecretKey::new(vec![1u8; 32]).is_ok());
        assert_eq!(SecretKey::generate().expose().len(), MIN_SECRET_KEY_LEN);
    }

    #[test]
    fn test_secret_key_debug_redaction() {
        let key = SecretKey::new("super-secret-super-secret-super-secret").unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super"));
    }

    #[test]
    fn test_hmac_rfc4231_large_key() {
        // RFC 4231 test case 6: 131-byte key, larger than the block size
        let key = SecretKey::new(vec![0xaau8; 131]).unwrap();
        let mac = hmac_sha256(&key, b"Test Using Larger Than Block-Size Key - Hash Key First");
        let expected =
            hex::decode("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_hmac_depends_on_key() {
        let data = b"payload";
        let a = hmac_sha256(&SecretKey::new(vec![1u8; 32]).unwrap(), data);
        let b = hmac_sha256(&SecretKey::new(vec![2u8; 32]).unwrap(), data);
        assert_ne!(a, b);
    }

    #[test]
    fn test_base64url_alphabet_and_padding() {
        // 0xfb 0xff encodes to "+/8=" in the standard alphabet
        assert_eq!(to_base64url(&[0xfb, 0xff]), "-_8=");
        assert_eq!(from_base64url("-_8=").unwrap(), vec![0xfb, 0xff]);
        // 32-byte MAC always carries one padding character
        assert!(to_base64url(&[0u8; 32]).ends_with('='));
    }

    #[test]
    fn test_base64url_rejects_standard_alphabet() {
        assert!(from_base64url("+/8=").is_err());
    }

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abcd", b"abcd"));
        assert!(!constant_time_eq(b"abcd", b"abce"));
        assert!(!constant_time_eq(b"abcd", b"abc"));
    }
}
