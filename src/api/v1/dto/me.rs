/*
 * Responsibility
 * - GET /me の response DTO
 * - token 本体は返さない (呼び出し元は既に持っている)
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub issuer: String,
    pub audience: Vec<String>,
    pub expires_at: u64,
}
