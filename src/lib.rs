//! # Webhook SQL Submit
//!
//! 一次性自动化流程：向测评服务注册，按报名编号末位数字的奇偶
//! 选出两条预置 SQL 中的一条，再把它提交到注册时下发的 webhook。
//!
//! ## 模块结构
//!
//! - `config` - 运行配置（身份三元组、接口地址、Authorization 格式、超时）
//! - `error` - 致命错误类型
//! - `query` - 两条静态 SQL 与奇偶选题规则
//! - `client` - HTTP 传输层抽象 + 注册/提交客户端
//! - `app` - 编排层：注册 → 选题 → 提交
//! - `logger` - tracing 日志初始化

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod query;

// 重新导出常用类型
pub use app::App;
pub use client::{
    HiringClient, HttpResponse, HttpTransport, ReqwestTransport, SessionCredentials,
    SubmissionOutcome, TransportError,
};
pub use config::{AuthScheme, Config};
pub use error::{AppError, AppResult};
pub use query::{SqlQuery, MAX_PAYMENT_SQL, YOUNGER_COUNT_SQL};
