//! HTTP 传输层
//!
//! 把"发一次 JSON POST"抽象成 trait，编排逻辑只依赖这个能力，
//! 测试时注入假实现即可，不需要真实网络。

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// 传输层错误（连接失败、超时、DNS 解析失败等）
///
/// 注意：成功收到 4xx/5xx 响应不属于传输层错误。
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// 一次 HTTP 调用的结果
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP 状态码
    pub status: u16,
    /// 原始响应体
    pub body: String,
}

impl HttpResponse {
    /// 状态码是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON POST 能力
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// 向 `url` 发送 JSON POST
    ///
    /// `Content-Type: application/json` 由实现负责；`headers` 是额外头。
    /// 只要拿到了响应（无论状态码）就返回 `Ok`。
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Value,
    ) -> Result<HttpResponse, TransportError>;
}

/// 基于 reqwest 的生产实现
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 创建传输层，超时必须显式给出
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Value,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.post(url).json(body);
        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request.send().await.map_err(TransportError::from)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::from)?;

        Ok(HttpResponse { status, body })
    }
}
