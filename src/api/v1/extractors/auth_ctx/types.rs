/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 * - extensions のキーは VerifiedIdentity 型そのもの (1 リクエストに 1 つだけ)
 */
use thiserror::Error;

/// Identity lookup failed.
///
/// This is a wiring error (handler mounted without the auth middleware), not an
/// authentication failure of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("no verified identity in request extensions")]
    Missing,
}
