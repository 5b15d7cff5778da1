/*
 * Responsibility
 * - tokio runtime 起動
 * - mist_api::app::run() の呼び出し（ロジックは置かない）
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mist_api::app::run().await
}
