//! Domain Services
//!
//! Pure, synchronous domain logic: time and token signing.

pub mod clock;
pub mod token_codec;

pub use clock::{Clock, ManualClock, SystemClock};
pub use token_codec::TokenCodec;

use crate::domain::entity::claims::Claims;
use crate::error::AuthResult;

/// Turns a presented bearer token into verified claims
///
/// Implemented by the codec itself and by the orchestrator that wraps it.
pub trait TokenResolver: Send + Sync {
    fn resolve(&self, token: &str) -> AuthResult<Claims>;
}

impl<T: TokenResolver + ?Sized> TokenResolver for std::sync::Arc<T> {
    fn resolve(&self, token: &str) -> AuthResult<Claims> {
        (**self).resolve(token)
    }
}
