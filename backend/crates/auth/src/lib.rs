//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, token codec, repository trait
//! - `application/` - Credential store and auth orchestrator
//! - `infra/` - Repository implementations
//! - `presentation/` - HTTP handlers, DTOs, access gate, router
//!
//! ## Features
//! - User registration with unique username and email
//! - Login with username + password, returning a signed bearer token
//! - Stateless token validation (HMAC-SHA256, 24 hour lifetime)
//! - Bearer access gate for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optionally peppered
//! - Token signature checked in constant time before the payload is decoded
//! - Login never reveals whether the username exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{AuthOrchestrator, CredentialStore};
pub use domain::entity::{Claims, Identity};
pub use domain::service::{TokenCodec, TokenResolver};
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryIdentityRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
