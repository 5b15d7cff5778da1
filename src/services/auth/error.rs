use thiserror::Error;

/// Reasons a request fails authentication.
///
/// Every variant is terminal for the token that produced it. The middleware turns all of
/// them into a 401; `public_reason` is the only text that reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid token format")]
    MalformedHeader,
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token has expired")]
    Expired,
    #[error("token is not valid yet")]
    NotYetValid,
    #[error("invalid audience claim")]
    InvalidAudience,
    #[error("invalid issuer claim")]
    InvalidIssuer,
}

impl AuthError {
    /// Coarse description safe to send back to API callers.
    pub fn public_reason(&self) -> &'static str {
        match self {
            Self::MalformedHeader => "invalid authorization header",
            Self::Expired => "token expired",
            Self::Malformed
            | Self::SignatureInvalid
            | Self::NotYetValid
            | Self::InvalidAudience
            | Self::InvalidIssuer => "invalid token",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Self::SignatureInvalid,
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::ImmatureSignature => Self::NotYetValid,
            // Segment count, base64, JSON shape, missing `exp`, unknown `alg` name, ...
            _ => Self::Malformed,
        }
    }
}
