//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::identity::Identity;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

// ============================================================================
// User
// ============================================================================

/// Public view of an identity (never carries the password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&Identity> for UserResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.user_name.to_string(),
            email: identity.email.to_string(),
        }
    }
}

// ============================================================================
// Protected Resources
// ============================================================================

/// Profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Dashboard response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub message: String,
    pub username: String,
    pub stats: DashboardStats,
    /// Token expiry, Unix seconds
    pub expires_at: i64,
}

/// Dashboard statistics
///
/// No login history is tracked, so these are fixed sample values.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub logins: u32,
    pub last_login: &'static str,
    pub account_type: &'static str,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            logins: 42,
            last_login: "2024-01-15",
            account_type: "premium",
        }
    }
}
