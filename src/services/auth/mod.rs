pub mod bearer;
pub mod claims;
pub mod error;
pub mod factory;
pub mod identity;
pub mod verifier;

#[cfg(test)]
pub mod test_support;

pub use bearer::extract_bearer;
pub use claims::Claims;
pub use error::AuthError;
pub use factory::build_claims_verifier;
pub use identity::VerifiedIdentity;
pub use verifier::ClaimsVerifier;
