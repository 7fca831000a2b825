/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 报名姓名
    pub name: String,
    /// 报名编号（末尾数字决定提交哪条 SQL）
    pub reg_no: String,
    /// 报名邮箱
    pub email: String,
    /// 注册接口地址
    pub registration_url: String,
    /// 提交失败时的备用接口地址
    pub fallback_url: String,
    /// Authorization 头格式（远端期望哪种格式尚无定论，两种都支持）
    pub auth_scheme: AuthScheme,
    /// HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
}

/// Authorization 头格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    /// 直接发送原始 token
    Raw,
    /// 发送 "Bearer <token>"
    Bearer,
}

impl AuthScheme {
    /// 根据格式拼出 Authorization 头的值
    pub fn header_value(&self, token: &str) -> String {
        match self {
            AuthScheme::Raw => token.to_string(),
            AuthScheme::Bearer => format!("Bearer {}", token),
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "raw" => Some(AuthScheme::Raw),
            "bearer" => Some(AuthScheme::Bearer),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            reg_no: "REG12347".to_string(),
            email: "john@example.com".to_string(),
            registration_url: "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA"
                .to_string(),
            fallback_url: "https://bfhldevapigw.healthrx.co.in/hiring/testWebhook/JAVA"
                .to_string(),
            auth_scheme: AuthScheme::Raw,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            name: std::env::var("CANDIDATE_NAME").unwrap_or(default.name),
            reg_no: std::env::var("CANDIDATE_REG_NO").unwrap_or(default.reg_no),
            email: std::env::var("CANDIDATE_EMAIL").unwrap_or(default.email),
            registration_url: std::env::var("REGISTRATION_URL")
                .unwrap_or(default.registration_url),
            fallback_url: std::env::var("FALLBACK_URL").unwrap_or(default.fallback_url),
            auth_scheme: std::env::var("AUTH_SCHEME")
                .ok()
                .and_then(|v| AuthScheme::parse(&v))
                .unwrap_or(default.auth_scheme),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.request_timeout_secs),
        }
    }
}
