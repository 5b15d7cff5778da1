/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証済みリクエストのコンテキスト（VerifiedIdentity）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - IdentityError
 * - Authenticated
 * - verified_identity
 */

mod core;
mod types;

pub use self::core::{Authenticated, verified_identity};
pub use types::IdentityError;
