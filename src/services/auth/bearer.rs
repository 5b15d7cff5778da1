//! `Authorization` header → bearer token string.

use crate::services::auth::AuthError;

pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// The value must split on whitespace into exactly `Bearer` and one token; anything else,
/// including an empty header, is `MalformedHeader`. No decoding happens here.
pub fn extract_bearer(authorization: &str) -> Result<&str, AuthError> {
    let mut parts = authorization.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bearer_with_a_single_token() {
        assert_eq!(extract_bearer("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
    }

    #[test]
    fn empty_header_has_zero_parts() {
        assert_eq!(extract_bearer(""), Err(AuthError::MalformedHeader));
        assert_eq!(extract_bearer("   "), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn scheme_without_token_is_rejected() {
        assert_eq!(extract_bearer("Bearer"), Err(AuthError::MalformedHeader));
        assert_eq!(extract_bearer("Bearer "), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn bare_token_is_rejected() {
        assert_eq!(extract_bearer("bad_token"), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert_eq!(
            extract_bearer("Token abc.def.ghi"),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(extract_bearer("Basic dXNlcjpwdw=="), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        assert_eq!(
            extract_bearer("bearer abc.def.ghi"),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn more_than_two_parts_is_rejected() {
        assert_eq!(
            extract_bearer("Bearer abc.def.ghi extra"),
            Err(AuthError::MalformedHeader)
        );
    }
}
