//! 应用入口 - 编排层
//!
//! 持有配置，创建真实的浏览器抓取器，运行一次流程并汇总结果

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::ChromeFetcher;
use crate::utils::logging;
use crate::workflow::{DigestFlow, RunReport};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        logging::log_startup(&config.source_url);
        info!("📁 输出目录: {}", config.output_dir.display());
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunReport> {
        let fetcher = ChromeFetcher::new(&self.config);
        let flow = DigestFlow::new(&self.config, fetcher)?;

        let report = flow.run().await;

        let message = report.error.as_ref().map(|e| e.to_string());
        logging::print_final_stats(report.is_success(), report.articles, message.as_deref());

        Ok(report)
    }
}
