use tracing::error;
use webhook_sql_submit::{logger, App, Config};

#[tokio::main]
async fn main() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用；致命错误打日志后以非零码退出
    let result = match App::initialize(config) {
        Ok(app) => app.run().await.map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("❌ 运行失败: {:#}", e);
        std::process::exit(1);
    }
}
