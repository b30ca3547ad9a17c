//! 输出写入服务 - 业务能力层
//!
//! 只负责把渲染好的页面和文章数据写到输出目录

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::WriteError;
use crate::models::Article;

/// 成功写入的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub html_path: PathBuf,
    /// JSON 只是调试数据，写入失败时为 None
    pub json_path: Option<PathBuf>,
}

/// 输出写入服务
pub struct OutputWriter {
    dir: PathBuf,
    html_filename: String,
    json_filename: String,
}

impl OutputWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            dir: config.output_dir.clone(),
            html_filename: config.html_filename.clone(),
            json_filename: config.json_filename.clone(),
        }
    }

    /// 写入 HTML 和 JSON
    ///
    /// 先写 HTML，失败时返回错误且不再写 JSON。
    /// JSON 写入失败只记录警告，不影响结果。两个文件都会被覆盖。
    pub fn write(&self, html: &str, articles: &[Article]) -> Result<WrittenFiles, WriteError> {
        fs::create_dir_all(&self.dir).map_err(|source| WriteError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let html_path = self.dir.join(&self.html_filename);
        write_file(&html_path, html)?;
        info!("HTML页面已保存到: {}", html_path.display());

        let json_path = match self.write_json(articles) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("保存JSON文件时出错: {}", e);
                None
            }
        };

        Ok(WrittenFiles {
            html_path,
            json_path,
        })
    }

    /// 写入 JSON 调试数据（2 空格缩进，非 ASCII 字符原样保留）
    pub fn write_json(&self, articles: &[Article]) -> Result<PathBuf, WriteError> {
        let json_path = self.dir.join(&self.json_filename);
        let json = serde_json::to_string_pretty(articles).map_err(|source| WriteError::Json {
            path: json_path.clone(),
            source,
        })?;
        write_file(&json_path, &json)?;
        info!("JSON数据已保存到: {}", json_path.display());
        Ok(json_path)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), WriteError> {
    debug!("写入 {} ({} 字节)", path.display(), contents.len());
    fs::write(path, contents).map_err(|source| WriteError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// 读回 JSON 数据
pub fn load_articles(path: &Path) -> Result<Vec<Article>, WriteError> {
    let content = fs::read_to_string(path).map_err(|source| WriteError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| WriteError::Json {
        path: path.to_path_buf(),
        source,
    })
}
