use crate::services::auth::Claims;

/// Result of a successful authentication pass.
///
/// - Only `ClaimsVerifier::verify` creates one, after signature, audience and issuer checks
///   have all passed.
/// - The middleware stores it in request extensions; handlers read it through the
///   `Authenticated` extractor. It is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    token: String,
    claims: Claims,
}

impl VerifiedIdentity {
    pub(in crate::services::auth) fn new(token: String, claims: Claims) -> Self {
        Self { token, claims }
    }

    /// The bearer token exactly as the caller sent it.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn user_id(&self) -> &str {
        &self.claims.user_id
    }

    /// `Authorization` value for forwarding the caller's credential to backend services.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", super::bearer::BEARER_SCHEME, self.token)
    }
}

#[cfg(test)]
mod tests {
    use crate::services::auth::ClaimsVerifier;
    use crate::services::auth::test_support::{AUDIENCE, ISSUER, SECRET, auth_config, claims, mint};

    #[test]
    fn forwarded_header_carries_the_original_token() {
        let token = mint(SECRET, &claims(ISSUER, &[AUDIENCE], "user-7"));
        let identity = ClaimsVerifier::new(auth_config()).verify(&token).unwrap();

        assert_eq!(identity.authorization_header(), format!("Bearer {token}"));
        assert_eq!(identity.user_id(), "user-7");
    }
}
