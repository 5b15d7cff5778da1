//! # mist-api
//!
//! Bearer-JWT authentication gateway for the Mist REST API.
//!
//! The binary serves `/health` and `/api/v1/*`. The library side exposes the
//! verifier and the per-request [`VerifiedIdentity`] so that collaborators
//! mounted under `/api/v1` can read the caller and forward its credential.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use services::auth::{AuthError, ClaimsVerifier, VerifiedIdentity};
