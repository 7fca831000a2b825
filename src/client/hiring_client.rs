//! 招聘平台客户端
//!
//! 封装注册与提交两个接口的调用逻辑

use crate::client::transport::HttpTransport;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// 注册成功后拿到的会话凭据
///
/// 只保存在内存里，accessToken 不得出现在任何日志中。
#[derive(Debug, Clone)]
pub struct SessionCredentials {
    /// 提交结果用的 webhook 地址
    pub webhook: String,
    /// Authorization 头里要带的 token
    pub access_token: String,
}

/// 提交的最终结果
///
/// 非 2xx 状态码不算错误，原样上报给调用方。
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// 最终 HTTP 状态码
    pub status: u16,
    /// 原始响应体
    pub body: String,
    /// 是否走了备用接口
    pub via_fallback: bool,
}

/// 注册接口的响应体
#[derive(Deserialize)]
struct RegistrationResponse {
    #[serde(default)]
    webhook: Option<String>,
    #[serde(default, rename = "accessToken")]
    access_token: Option<String>,
}

/// 招聘平台客户端
pub struct HiringClient {
    transport: Arc<dyn HttpTransport>,
    config: Config,
}

impl HiringClient {
    /// 创建新的客户端
    pub fn new(transport: Arc<dyn HttpTransport>, config: Config) -> Self {
        Self { transport, config }
    }

    /// 注册：POST {name, regNo, email} 到注册接口
    ///
    /// 成功条件：状态码 2xx 且响应里 webhook / accessToken 都非空。
    /// 任何一条不满足都直接终止本次运行，后续提交不会发生。
    pub async fn register(&self) -> AppResult<SessionCredentials> {
        let body = json!({
            "name": self.config.name,
            "regNo": self.config.reg_no,
            "email": self.config.email,
        });

        let response = self
            .transport
            .post_json(&self.config.registration_url, &[], &body)
            .await
            .map_err(|source| AppError::RegistrationTransport {
                endpoint: self.config.registration_url.clone(),
                source,
            })?;

        if !response.is_success() {
            return Err(AppError::RegistrationRejected {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: RegistrationResponse = serde_json::from_str(&response.body)
            .map_err(|_| AppError::RegistrationMalformed {
                body: response.body.clone(),
            })?;

        match (parsed.webhook, parsed.access_token) {
            (Some(webhook), Some(access_token)) => Ok(SessionCredentials {
                webhook,
                access_token,
            }),
            _ => Err(AppError::RegistrationMalformed {
                body: response.body,
            }),
        }
    }

    /// 提交最终 SQL 到 webhook
    ///
    /// payload 和请求头只构建一次，主备两次尝试完全一致。
    /// 只有网络层失败才改走备用接口，且只重试这一次；
    /// 拿到 4xx/5xx 属于正常拿到响应，不触发备用接口。
    pub async fn submit(
        &self,
        credentials: &SessionCredentials,
        sql: &str,
    ) -> AppResult<SubmissionOutcome> {
        let payload = json!({ "finalQuery": sql });
        let headers = vec![(
            "Authorization".to_string(),
            self.config
                .auth_scheme
                .header_value(&credentials.access_token),
        )];

        match self
            .transport
            .post_json(&credentials.webhook, &headers, &payload)
            .await
        {
            Ok(response) => Ok(SubmissionOutcome {
                status: response.status,
                body: response.body,
                via_fallback: false,
            }),
            Err(primary_error) => {
                warn!("⚠️ 提交请求失败，改用备用接口重试一次: {}", primary_error);

                let response = self
                    .transport
                    .post_json(&self.config.fallback_url, &headers, &payload)
                    .await
                    .map_err(|source| AppError::SubmissionTransport {
                        endpoint: self.config.fallback_url.clone(),
                        source,
                    })?;

                Ok(SubmissionOutcome {
                    status: response.status,
                    body: response.body,
                    via_fallback: true,
                })
            }
        }
    }
}
