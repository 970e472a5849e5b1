//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Keyed message authentication (HMAC-SHA256) and its secret key type
//! - URL-safe Base64 encoding
//! - Constant-time comparison
//! - Password hashing (Argon2id, optional pepper)

pub mod crypto;
pub mod password;
