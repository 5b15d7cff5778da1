//! access token（HS256 JWT）検証 → VerifiedIdentity を extensions に入れる
//!
//! - `Authorization: Bearer <jwt>` を取り出す（形式違反は署名検証の前に 401）
//! - 署名 + exp/nbf/iat → aud → iss の順に検証（最初の失敗で打ち切り）
//! - 失敗時は next を呼ばずに 401、成功時のみ extensions に insert して next へ

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{AuthError, VerifiedIdentity, extract_bearer};
use crate::state::AppState;

/// 渡された Router の全ルート (fallback 含む) を Bearer 認証の内側に置く。
///
/// `api::v1::routes` はこう使っている：
/// ```ignore
/// let v1 = Router::new().route("/me", get(me)).fallback(fallback);
/// access::apply(v1, state) // 未知パスも 401 が先、認証後に 404
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // ClaimsVerifier は AppState 経由で共有する
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let identity = match authenticate(&state, &req) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(
                error = ?err,
                method = %req.method(),
                path = %req.uri().path(),
                "request authentication failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(user_id = %identity.user_id(), "request authenticated");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn authenticate(state: &AppState, req: &Request<Body>) -> Result<VerifiedIdentity, AuthError> {
    // 欠落は空ヘッダと同じ扱い、非 ASCII は形式違反
    let authorization = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => value.to_str().map_err(|_| AuthError::MalformedHeader)?,
        None => "",
    };

    let token = extract_bearer(authorization)?;

    state.auth.verify(token)
}
