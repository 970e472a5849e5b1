//! Auth Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `auth::AuthError`.

use anyhow::Context;
use auth::{AuthConfig, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_server=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth_config = load_auth_config()?;
    tracing::info!(
        token_ttl_secs = auth_config.token_ttl.as_secs(),
        peppered = auth_config.pepper().is_some(),
        "Auth configuration loaded"
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .merge(auth_router(auth_config)?)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Public: POST /register, POST /login");
    tracing::info!("Protected (Bearer token): GET /profile, GET /dashboard");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the auth configuration from the environment
///
/// Debug builds fall back to a random token secret; release builds require
/// `AUTH_TOKEN_SECRET`.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("AUTH_TOKEN_SECRET") {
        Ok(secret) => AuthConfig::new(secret.into_bytes())?,
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
            AuthConfig::development()
        }
        Err(_) => anyhow::bail!("AUTH_TOKEN_SECRET must be set in production"),
    };

    if let Ok(ttl) = env::var("AUTH_TOKEN_TTL_SECS") {
        let secs: u64 = ttl
            .parse()
            .context("AUTH_TOKEN_TTL_SECS must be a number of seconds")?;
        config = config.with_token_ttl(Duration::from_secs(secs));
    }

    if let Ok(pepper) = env::var("AUTH_PASSWORD_PEPPER") {
        config = config.with_password_pepper(pepper.into_bytes());
    }

    Ok(config)
}
