//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{AuthOrchestrator, LoginInput, RegisterInput};
use crate::domain::repository::IdentityRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    DashboardResponse, DashboardStats, LoginRequest, LoginResponse, ProfileResponse,
    RegisterRequest, UserResponse,
};
use crate::presentation::extract::JsonBody;
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: IdentityRepository + Sync + 'static,
{
    pub auth: Arc<AuthOrchestrator<R>>,
}

impl<R> Clone for AuthAppState<R>
where
    R: IdentityRepository + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: IdentityRepository + Sync + 'static,
{
    let input = RegisterInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    let identity = state.auth.register(input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&identity))))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: IdentityRepository + Sync + 'static,
{
    let input = LoginInput {
        username: req.username,
        password: req.password,
    };

    let output = state.auth.login(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        user: UserResponse::from(&output.identity),
    }))
}

// ============================================================================
// Protected
// ============================================================================

/// GET /profile
pub async fn profile<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(claims): CurrentUser,
) -> AuthResult<Json<ProfileResponse>>
where
    R: IdentityRepository + Sync + 'static,
{
    let identity = state.auth.get_profile(&claims).await?;

    Ok(Json(ProfileResponse {
        message: "Profile retrieved successfully".to_string(),
        user: UserResponse::from(&identity),
    }))
}

/// GET /dashboard
pub async fn dashboard(CurrentUser(claims): CurrentUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: "Welcome to your dashboard!".to_string(),
        username: claims.username,
        stats: DashboardStats::default(),
        expires_at: claims.expires_at,
    })
}
