//! 摘要生成流程 - 流程层
//!
//! 流程顺序（单次运行，不重试）：
//! 1. 抓取页面
//! 2. 提取文章
//! 3. 渲染 HTML
//! 4. 写入 HTML 和 JSON

use chrono::Local;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult, FetchError};
use crate::infrastructure::{FetchOptions, PageFetcher};
use crate::services::{ArticleExtractor, DigestRenderer, OutputWriter, WrittenFiles};
use crate::utils::logging;

/// 运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Start,
    Fetching,
    FetchFailed,
    Extracted,
    Rendering,
    Writing,
    Done,
    WriteFailed,
}

impl RunState {
    /// 是否为终止状态
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::FetchFailed | RunState::WriteFailed)
    }
}

/// 单次运行的结果
#[derive(Debug)]
pub struct RunReport {
    pub state: RunState,
    /// 提取到的文章数量
    pub articles: usize,
    pub written: Option<WrittenFiles>,
    pub error: Option<AppError>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            state: RunState::Start,
            articles: 0,
            written: None,
            error: None,
        }
    }

    fn transition(&mut self, next: RunState) {
        debug!("状态切换: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail(mut self, state: RunState, err: impl Into<AppError>) -> Self {
        let err = err.into();
        error!("{}", err);
        self.transition(state);
        self.error = Some(err);
        self
    }

    pub fn is_success(&self) -> bool {
        self.state == RunState::Done
    }

    /// 进程退出码：成功为 0，其余为 1
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// 摘要生成流程
///
/// - 只依赖 PageFetcher 能力，不持有浏览器
/// - 各阶段严格顺序执行
pub struct DigestFlow<F: PageFetcher> {
    fetcher: F,
    source_url: String,
    options: FetchOptions,
    extractor: ArticleExtractor,
    renderer: DigestRenderer,
    writer: OutputWriter,
}

impl<F: PageFetcher> DigestFlow<F> {
    /// 创建新的流程
    pub fn new(config: &Config, fetcher: F) -> AppResult<Self> {
        Ok(Self {
            fetcher,
            source_url: config.source_url.clone(),
            options: FetchOptions::from_config(config),
            extractor: ArticleExtractor::new(config)?,
            renderer: DigestRenderer::new(config),
            writer: OutputWriter::new(config),
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::new();

        // ========== 抓取 ==========
        report.transition(RunState::Fetching);
        let content = match self.fetcher.fetch(&self.source_url, &self.options).await {
            Ok(content) if content.html.trim().is_empty() => {
                return report.fail(
                    RunState::FetchFailed,
                    FetchError::EmptyContent { url: content.url },
                );
            }
            Ok(content) => content,
            Err(e) => return report.fail(RunState::FetchFailed, e),
        };

        // ========== 提取 ==========
        let articles = self.extractor.extract(&content.html);
        report.articles = articles.len();
        report.transition(RunState::Extracted);
        logging::log_articles(&articles);

        // ========== 渲染 ==========
        report.transition(RunState::Rendering);
        let html = self.renderer.render(&articles, Local::now());

        // ========== 写入 ==========
        report.transition(RunState::Writing);
        match self.writer.write(&html, &articles) {
            Ok(written) => {
                report.written = Some(written);
                report.transition(RunState::Done);
                info!("✓ 摘要生成完成");
                report
            }
            Err(e) => report.fail(RunState::WriteFailed, e),
        }
    }
}
