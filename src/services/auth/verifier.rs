use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::config::AuthConfig;
use crate::services::auth::{AuthError, Claims, VerifiedIdentity};

/// Claim checks that run after the token has been decoded and its signature verified.
///
/// The order of `CLAIM_CHECKS` is part of the contract: when several checks would fail,
/// the first one in this list is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimCheck {
    Audience,
    Issuer,
}

pub const CLAIM_CHECKS: [ClaimCheck; 2] = [ClaimCheck::Audience, ClaimCheck::Issuer];

impl ClaimCheck {
    fn run(self, claims: &Claims, config: &AuthConfig) -> Result<(), AuthError> {
        match self {
            Self::Audience => {
                if claims.has_audience(&config.audience) {
                    Ok(())
                } else {
                    Err(AuthError::InvalidAudience)
                }
            }
            Self::Issuer => {
                if claims.issuer == config.issuer {
                    Ok(())
                } else {
                    Err(AuthError::InvalidIssuer)
                }
            }
        }
    }
}

/// HS256 access-token verifier bound to the process-wide [`AuthConfig`].
///
/// - Key material is intentionally not printable via Debug.
/// - Holds no per-request state; one instance is shared by all requests.
#[derive(Clone)]
pub struct ClaimsVerifier {
    config: AuthConfig,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for ClaimsVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("ClaimsVerifier")
            .field("config", &self.config)
            .field("validation", &self.validation)
            .finish()
    }
}

impl ClaimsVerifier {
    pub fn new(config: AuthConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        // iss/aud are checked by CLAIM_CHECKS so the failure order stays under our control.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = config.leeway_seconds;

        Self {
            config,
            decoding_key,
            validation,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Decode the token, verify its signature and temporal claims.
    ///
    /// `jsonwebtoken::Validation` covers segment structure, signature, `exp` and `nbf`.
    /// `iat` is checked here since the library does not look at it.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| {
                tracing::debug!(error = %err, "access token decode failed");
                AuthError::from(err)
            })?;

        let claims = data.claims;

        if let Some(iat) = claims.issued_at {
            let now = chrono::Utc::now().timestamp().max(0) as u64;
            if iat > now.saturating_add(self.config.leeway_seconds) {
                return Err(AuthError::NotYetValid);
            }
        }

        Ok(claims)
    }

    /// Full verification: decode, then every claim check in order.
    ///
    /// This is the entry-point for the middleware.
    pub fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError> {
        let claims = self.decode(token)?;

        for check in CLAIM_CHECKS {
            check.run(&claims, &self.config)?;
        }

        Ok(VerifiedIdentity::new(token.to_string(), claims))
    }
}
