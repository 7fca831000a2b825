use crate::client::{HiringClient, HttpTransport, ReqwestTransport, SubmissionOutcome};
use crate::config::Config;
use crate::query::SqlQuery;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 应用主结构
///
/// 一次运行只执行一遍：注册 → 选题 → 提交。没有并发，没有跨运行状态。
pub struct App {
    config: Config,
    client: HiringClient,
}

impl App {
    /// 初始化应用（构建带显式超时的 HTTP 客户端）
    pub fn initialize(config: Config) -> Result<Self> {
        let transport =
            ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// 用指定的传输层初始化（测试时注入假传输层）
    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        let client = HiringClient::new(transport, config.clone());
        Self { config, client }
    }

    /// 运行应用主逻辑
    ///
    /// 注册失败直接返回错误，选题和提交都不会发生。
    pub async fn run(&self) -> Result<SubmissionOutcome> {
        log_startup(&self.config);

        // 第一步：注册
        info!("📨 正在注册...");
        let credentials = self.client.register().await?;
        info!("✓ 注册成功，webhook: {}", credentials.webhook);
        info!("✓ accessToken: (已隐藏)");

        // 第二步：根据报名编号选题
        let query = SqlQuery::select(&self.config.reg_no);
        let sql = query.sql();
        log_query_selected(query, sql);

        // 第三步：提交（网络层失败时客户端内部会走一次备用接口）
        info!("📤 正在提交最终 SQL...");
        let outcome = self.client.submit(&credentials, sql).await?;

        print_final_outcome(&outcome);

        Ok(outcome)
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 注册并提交最终 SQL");
    info!("📋 报名编号: {}", config.reg_no);
    info!("{}", "=".repeat(60));
}

fn log_query_selected(query: SqlQuery, sql: &str) {
    info!("📝 选中题目: {:?}", query);
    info!("SQL 预览 (前 200 字符):\n{}", truncate_text(sql, 200));
}

fn print_final_outcome(outcome: &SubmissionOutcome) {
    info!("\n{}", "=".repeat(60));
    if outcome.via_fallback {
        info!("📬 提交经由备用接口完成");
    }
    info!("提交状态码: {}", outcome.status);
    info!("提交响应体: {}", outcome.body);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text_unchanged() {
        assert_eq!(truncate_text("SELECT 1;", 200), "SELECT 1;");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_text("abcdef", 3), "abc...");
    }
}
