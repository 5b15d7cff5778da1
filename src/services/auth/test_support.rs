//! Token minting helpers shared by unit tests.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::config::AuthConfig;
use crate::services::auth::Claims;

pub const SECRET: &str = "s1";
pub const ISSUER: &str = "mist-api";
pub const AUDIENCE: &str = "mist-api";

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        secret_key: SECRET.to_string(),
        issuer: ISSUER.to_string(),
        audience: AUDIENCE.to_string(),
        leeway_seconds: 0,
    }
}

pub fn now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

/// Claims valid for one hour from now.
pub fn claims(issuer: &str, audience: &[&str], user_id: &str) -> Claims {
    let now = now();
    Claims {
        issuer: issuer.to_string(),
        audience: audience.iter().map(|a| a.to_string()).collect(),
        expires_at: now + 3600,
        issued_at: Some(now),
        not_before: None,
        subject: None,
        user_id: user_id.to_string(),
    }
}

pub fn mint<T: Serialize>(secret: &str, claims: &T) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("sign test token")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
