use thiserror::Error;

/// 应用程序错误类型
///
/// 只收录会终止本次运行的致命错误；提交接口返回的非 2xx 状态码
/// 不算错误，作为最终结果原样上报（见 `SubmissionOutcome`）。
#[derive(Debug, Error)]
pub enum AppError {
    /// 注册接口无法到达（网络层失败）
    #[error("注册请求失败 ({endpoint}): {source}")]
    RegistrationTransport {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 注册接口返回非 2xx 状态码
    #[error("注册被拒绝 (状态码: {status}): {body}")]
    RegistrationRejected { status: u16, body: String },

    /// 注册接口返回 2xx 但缺少 webhook 或 accessToken 字段
    #[error("注册响应缺少 webhook 或 accessToken: {body}")]
    RegistrationMalformed { body: String },

    /// 主接口和备用接口都在网络层失败（主接口失败后只重试备用接口一次）
    #[error("提交请求失败 ({endpoint}): {source}")]
    SubmissionTransport {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
