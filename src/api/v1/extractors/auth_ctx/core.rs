use axum::extract::FromRequestParts;
use axum::http::{Extensions, request::Parts};

use crate::error::AppError;
use crate::services::auth::VerifiedIdentity;

use super::IdentityError;

/// Look up the identity the auth middleware stored for this request.
pub fn verified_identity(extensions: &Extensions) -> Result<&VerifiedIdentity, IdentityError> {
    extensions
        .get::<VerifiedIdentity>()
        .ok_or(IdentityError::Missing)
}

/// Handler で VerifiedIdentity を受け取るための extractor
/// middleware が request.extensions() に insert 済みである前提
/// 見つからない場合は配線ミスなので 500 (401 とは区別する)
#[derive(Debug, Clone)]
pub struct Authenticated(pub VerifiedIdentity);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match verified_identity(&parts.extensions) {
            Ok(identity) => Ok(Authenticated(identity.clone())),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    path = %parts.uri.path(),
                    "handler requires authentication but the auth middleware did not run"
                );
                Err(err.into())
            }
        }
    }
}
