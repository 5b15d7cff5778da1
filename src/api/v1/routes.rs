/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - v1 配下は全て auth middleware を通す (未知のパスも 401 → 404 の順)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::me::me;
use crate::middleware::auth::access;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/me", get(me))
        .fallback(fallback);

    access::apply(router, state)
}

async fn fallback() -> crate::error::AppError {
    crate::error::AppError::NotFound
}
