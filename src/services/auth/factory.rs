/// Factory: build the shared `ClaimsVerifier` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::ClaimsVerifier;

pub fn build_claims_verifier(config: &Config) -> Arc<ClaimsVerifier> {
    let verifier = ClaimsVerifier::new(config.auth.clone());

    tracing::info!(auth = ?verifier.config(), "access token verifier configured");

    Arc::new(verifier)
}
