use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 页面抓取错误
    #[error("抓取错误: {0}")]
    Fetch(#[from] FetchError),
    /// 文件写入错误
    #[error("写入错误: {0}")]
    Write(#[from] WriteError),
    /// 链接匹配模式无效
    #[error("链接匹配模式无效: {0}")]
    Pattern(#[from] regex::Error),
}

/// 页面抓取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 启动浏览器失败
    #[error("启动浏览器失败: {message}")]
    BrowserLaunch { message: String },
    /// 导航或读取页面失败
    #[error("加载 {url} 失败: {source}")]
    Navigation {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面加载超时
    #[error("加载 {url} 超时 ({}ms)", .timeout.as_millis())]
    Timeout { url: String, timeout: Duration },
    /// 抓取器报告失败
    #[error("抓取失败: {message}")]
    Unsuccessful { message: String },
    /// 页面内容为空
    #[error("页面内容为空: {url}")]
    EmptyContent { url: String },
}

/// 文件写入错误
#[derive(Debug, Error)]
pub enum WriteError {
    /// 创建目录失败
    #[error("创建目录失败 ({}): {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON 序列化/反序列化失败
    #[error("JSON处理失败 ({}): {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ========== 便捷构造函数 ==========

impl FetchError {
    /// 创建浏览器启动错误
    pub fn browser_launch(err: impl std::fmt::Display) -> Self {
        FetchError::BrowserLaunch {
            message: err.to_string(),
        }
    }

    /// 创建导航错误
    pub fn navigation(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FetchError::Navigation {
            url: url.into(),
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_reports_millis() {
        let err = FetchError::Timeout {
            url: "https://example.com".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "加载 https://example.com 超时 (30000ms)");
    }

    #[test]
    fn test_app_error_wraps_write_error() {
        let err: AppError = WriteError::WriteFile {
            path: PathBuf::from("docs/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert!(matches!(err, AppError::Write(_)));
        assert!(err.to_string().contains("docs/index.html"));
    }
}
