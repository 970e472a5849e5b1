//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::{AuthConfig, AuthOrchestrator};
use crate::domain::repository::IdentityRepository;
use crate::error::AuthResult;
use crate::infra::memory::InMemoryIdentityRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AccessGate, require_bearer};

/// Create the Auth router with the in-memory repository
pub fn auth_router(config: AuthConfig) -> AuthResult<Router> {
    auth_router_generic(InMemoryIdentityRepository::new(), config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> AuthResult<Router>
where
    R: IdentityRepository + Sync + 'static,
{
    let auth = Arc::new(AuthOrchestrator::new(Arc::new(repo), config)?);
    Ok(router_for(auth))
}

/// Routes over an already-built orchestrator
pub fn router_for<R>(auth: Arc<AuthOrchestrator<R>>) -> Router
where
    R: IdentityRepository + Sync + 'static,
{
    let gate = AccessGate::new(auth.clone());
    let state = AuthAppState { auth };

    let protected = Router::new()
        .route("/profile", get(handlers::profile::<R>))
        .route("/dashboard", get(handlers::dashboard))
        .route_layer(middleware::from_fn_with_state(
            gate,
            require_bearer::<AuthOrchestrator<R>>,
        ));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
