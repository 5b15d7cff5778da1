/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: Bearer JWT 検証 / http: request-id, trace, body limit, timeout
 */
pub mod auth;
pub mod http;
