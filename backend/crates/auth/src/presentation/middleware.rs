//! Auth Middleware
//!
//! The access gate in front of protected routes, and the extractor that
//! hands the verified claims to handlers.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::entity::claims::Claims;
use crate::domain::service::TokenResolver;
use crate::error::{AuthError, AuthResult};

/// Expected authorization scheme
pub const BEARER_SCHEME: &str = "Bearer";

/// Bearer token gate
///
/// Cheap to clone; the resolver is shared.
pub struct AccessGate<V>
where
    V: TokenResolver,
{
    resolver: Arc<V>,
}

impl<V> Clone for AccessGate<V>
where
    V: TokenResolver,
{
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
        }
    }
}

impl<V> AccessGate<V>
where
    V: TokenResolver,
{
    pub fn new(resolver: Arc<V>) -> Self {
        Self { resolver }
    }

    /// Resolve the `Authorization` header into claims
    ///
    /// The header must be exactly `Bearer <token>`: one space, no other
    /// scheme, no extra parts.
    pub fn authorize(&self, headers: &HeaderMap) -> AuthResult<Claims> {
        let value = match headers.get(header::AUTHORIZATION) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(AuthError::MissingCredential),
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::MalformedAuthorizationHeader)?;

        let parts: Vec<&str> = value.split(' ').collect();
        let [scheme, token] = parts.as_slice() else {
            return Err(AuthError::MalformedAuthorizationHeader);
        };
        if *scheme != BEARER_SCHEME {
            return Err(AuthError::MalformedAuthorizationHeader);
        }

        self.resolver.resolve(token)
    }
}

/// Middleware that requires a valid bearer token
///
/// On success the claims are stored in request extensions; on failure the
/// inner handler is never called.
pub async fn require_bearer<V>(
    State(gate): State<AccessGate<V>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    V: TokenResolver + 'static,
{
    let claims = gate.authorize(req.headers())?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Claims of the caller, as verified by [`require_bearer`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::service::TokenCodec;
    use axum::http::HeaderValue;
    use platform::crypto::SecretKey;
    use std::time::Duration;

    fn gate() -> (AccessGate<TokenCodec>, TokenCodec) {
        let codec = TokenCodec::new(SecretKey::generate(), Duration::from_secs(3600)).unwrap();
        (AccessGate::new(Arc::new(codec.clone())), codec)
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_resolves() {
        let (gate, codec) = gate();
        let token = codec.issue("user_1", "alice", "a@x.com").unwrap();

        let claims = gate.authorize(&headers(&format!("Bearer {token}"))).unwrap();
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_missing_header() {
        let (gate, _) = gate();
        assert!(matches!(
            gate.authorize(&HeaderMap::new()),
            Err(AuthError::MissingCredential)
        ));
        assert!(matches!(
            gate.authorize(&headers("")),
            Err(AuthError::MissingCredential)
        ));
    }

    #[test]
    fn test_malformed_header() {
        let (gate, codec) = gate();
        let token = codec.issue("user_1", "alice", "a@x.com").unwrap();

        for value in [
            "Basic xyz".to_string(),
            token.clone(),
            format!("bearer {token}"),
            format!("Bearer  {token}"),
            format!("Bearer {token} extra"),
        ] {
            assert!(
                matches!(
                    gate.authorize(&headers(&value)),
                    Err(AuthError::MalformedAuthorizationHeader)
                ),
                "{value}"
            );
        }
    }

    #[test]
    fn test_token_errors_pass_through() {
        let (gate, _) = gate();
        assert!(matches!(
            gate.authorize(&headers("Bearer abc")),
            Err(AuthError::MalformedToken)
        ));
        assert!(matches!(
            gate.authorize(&headers("Bearer ")),
            Err(AuthError::MalformedToken)
        ));
    }
}
