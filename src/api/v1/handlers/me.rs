/*
 * Responsibility
 * - GET /api/v1/me
 * - 認証済み主体 (VerifiedIdentity) をそのまま返す。middleware → extractor の配線確認用
 */
use axum::Json;

use crate::api::v1::{dto::me::MeResponse, extractors::Authenticated};

pub async fn me(Authenticated(identity): Authenticated) -> Json<MeResponse> {
    let claims = identity.claims();

    Json(MeResponse {
        user_id: claims.user_id.clone(),
        subject: claims.subject.clone(),
        issuer: claims.issuer.clone(),
        audience: claims.audience.clone(),
        expires_at: claims.expires_at,
    })
}
