use std::process::ExitCode;

use smzdm_digest::{logger, App, Config};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志
    logger::init();

    // 配置全部为内置常量
    let app = App::initialize(Config::default());

    match app.run().await {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) => {
            error!("运行失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
