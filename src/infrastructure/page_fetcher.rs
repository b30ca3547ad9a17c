//! 页面抓取器 - 基础设施层
//!
//! 只暴露"给一个 URL，拿回渲染后的 HTML"的能力，
//! 不认识 Article，也不关心后续流程

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::emulation::SetScriptExecutionDisabledParams;
use chromiumoxide::cdp::browser_protocol::network::SetCacheDisabledParams;
use chromiumoxide::Browser;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::browser;
use crate::config::Config;
use crate::error::FetchError;

/// 单次抓取参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub render_javascript: bool,
    pub bypass_cache: bool,
    pub timeout: Duration,
}

impl FetchOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            render_javascript: config.render_javascript,
            bypass_cache: config.bypass_cache,
            timeout: config.page_timeout,
        }
    }
}

/// 抓取结果
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 请求的 URL
    pub url: String,
    /// 渲染后的页面 HTML
    pub html: String,
}

/// 页面抓取能力
///
/// 流程层只依赖这个 trait，测试时可以换成固定内容
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<PageContent, FetchError>;
}

/// 基于 chromiumoxide 的抓取器
///
/// 每次抓取启动一个新的浏览器，结束后关闭。
/// `timeout` 是启动浏览器加上加载页面的总时限，关闭浏览器不计入。
pub struct ChromeFetcher {
    config: Config,
}

impl ChromeFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait]
impl PageFetcher for ChromeFetcher {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<PageContent, FetchError> {
        let deadline = Instant::now() + options.timeout;
        let timed_out = || FetchError::Timeout {
            url: url.to_string(),
            timeout: options.timeout,
        };

        let (mut browser, handler) =
            tokio::time::timeout_at(deadline, browser::launch_headless_browser(&self.config))
                .await
                .map_err(|_| timed_out())?
                .map_err(FetchError::browser_launch)?;

        let result = match tokio::time::timeout_at(deadline, load_page(&browser, url, options)).await {
            Ok(result) => result,
            Err(_) => Err(timed_out()),
        };

        if let Err(e) = browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
        if let Err(e) = browser.wait().await {
            warn!("等待浏览器退出失败: {}", e);
        }
        handler.abort();

        let html = result?;
        if html.trim().is_empty() {
            return Err(FetchError::EmptyContent {
                url: url.to_string(),
            });
        }

        info!("成功爬取页面，内容长度: {}", html.len());
        Ok(PageContent {
            url: url.to_string(),
            html,
        })
    }
}

/// 打开空白页，按参数配置后导航并读取 HTML
async fn load_page(browser: &Browser, url: &str, options: &FetchOptions) -> Result<String, FetchError> {
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| FetchError::navigation(url, e))?;

    if options.bypass_cache {
        debug!("禁用浏览器缓存");
        page.execute(SetCacheDisabledParams::new(true))
            .await
            .map_err(|e| FetchError::navigation(url, e))?;
    }
    if !options.render_javascript {
        debug!("禁用页面脚本");
        page.execute(SetScriptExecutionDisabledParams::new(true))
            .await
            .map_err(|e| FetchError::navigation(url, e))?;
    }

    info!("正在加载: {}", url);
    page.goto(url)
        .await
        .map_err(|e| FetchError::navigation(url, e))?;
    page.wait_for_navigation()
        .await
        .map_err(|e| FetchError::navigation(url, e))?;

    page.content()
        .await
        .map_err(|e| FetchError::navigation(url, e))
}
