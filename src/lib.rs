//! # SMZDM Digest
//!
//! 抓取"什么值得买"的一个列表页，提取文章链接，生成静态 HTML 摘要和 JSON 调试数据
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - `PageFetcher` 能力接口，`ChromeFetcher` 用无头浏览器实现
//! - `browser/` - 启动 chromiumoxide 浏览器
//!
//! ### ② 业务能力层（Services）
//! - `ArticleExtractor` - 正则提取文章链接，去重、过滤、截断
//! - `DigestRenderer` - 渲染 HTML 页面
//! - `OutputWriter` - 写 index.html / articles.json
//!
//! ### ③ 流程层（Workflow）
//! - `DigestFlow` - fetch → extract → render → write，记录运行状态
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 创建真实抓取器，运行流程，输出统计
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, FetchError, WriteError};
pub use infrastructure::{ChromeFetcher, FetchOptions, PageContent, PageFetcher};
pub use models::Article;
pub use orchestrator::App;
pub use services::{ArticleExtractor, DigestRenderer, OutputWriter, WrittenFiles};
pub use workflow::{DigestFlow, RunReport, RunState};
