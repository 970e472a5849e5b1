//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod credential_store;
pub mod orchestrator;

// Re-exports
pub use config::{AuthConfig, DEFAULT_TOKEN_TTL};
pub use credential_store::CredentialStore;
pub use orchestrator::{AuthOrchestrator, LoginInput, LoginOutput, RegisterInput};
