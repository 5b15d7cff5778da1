/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: 起動時に一度だけ組み立てた ClaimsVerifier (以後 read-only)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::ClaimsVerifier;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<ClaimsVerifier>,
}

impl AppState {
    pub fn new(auth: Arc<ClaimsVerifier>) -> Self {
        Self { auth }
    }
}
