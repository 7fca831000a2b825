//! 客户端模块
//!
//! `transport` 是可注入的 HTTP 能力层，`hiring_client` 在其上实现
//! 注册 / 提交两个业务调用。

pub mod hiring_client;
pub mod transport;

pub use hiring_client::{HiringClient, SessionCredentials, SubmissionOutcome};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
