pub mod openrouter;

#[cfg(test)]
pub mod test_utils;

use std::sync::OnceLock;

use reqwest::Client;

use crate::error::{Result, ShipitError};

/// 全局 HTTP 客户端（共享连接池）
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// 获取或创建全局 HTTP 客户端
///
/// 不设置额外的超时，沿用 reqwest 的默认行为。
pub(crate) fn create_http_client() -> Result<Client> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client.clone());
    }

    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    let client = Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|e| ShipitError::Llm(format!("Failed to create HTTP client: {}", e)))?;

    Ok(HTTP_CLIENT.get_or_init(|| client).clone())
}
