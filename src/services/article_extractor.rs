//! 文章提取服务 - 业务能力层
//!
//! 用一条正则从页面 HTML 中扫描文章链接，不做 DOM 解析。
//! 链接文字内含有嵌套标签时不会被匹配。
//! 链接和标题中的 HTML 实体会被还原，渲染时再统一转义。

use std::borrow::Cow;
use std::collections::HashSet;

use chrono::{DateTime, Local};
use regex::{Captures, Regex};
use tracing::debug;

use crate::config::Config;
use crate::models::{Article, TIMESTAMP_FORMAT};

/// 文章提取器
pub struct ArticleExtractor {
    pattern: Regex,
    entity: Regex,
    source_name: String,
    max_articles: usize,
    min_title_chars: usize,
}

impl ArticleExtractor {
    /// 根据配置中的链接前缀构建提取器
    pub fn new(config: &Config) -> Result<Self, regex::Error> {
        let pattern = format!(
            r#"<a[^>]+href="({}[^"]+)"[^>]*>([^<]+)</a>"#,
            regex::escape(&config.link_prefix)
        );

        Ok(Self {
            pattern: Regex::new(&pattern)?,
            entity: Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|amp|lt|gt|quot|apos|nbsp);")?,
            source_name: config.source_name.clone(),
            max_articles: config.max_articles,
            min_title_chars: config.min_title_chars,
        })
    }

    /// 提取文章，发布时间取当前时间
    pub fn extract(&self, markup: &str) -> Vec<Article> {
        self.extract_at(markup, Local::now())
    }

    /// 提取文章，发布时间使用给定时间
    ///
    /// 按匹配顺序去重，标题去除首尾空白后少于最小长度的丢弃，
    /// 达到数量上限后停止扫描
    pub fn extract_at(&self, markup: &str, extracted_at: DateTime<Local>) -> Vec<Article> {
        let published_at = extracted_at.format(TIMESTAMP_FORMAT).to_string();
        let mut seen_urls = HashSet::new();
        let mut articles = Vec::new();

        for caps in self.pattern.captures_iter(markup) {
            if articles.len() >= self.max_articles {
                break;
            }

            let url = self.decode_entities(&caps[1]);
            let title = self.decode_entities(&caps[2]);
            let title = title.trim();

            if title.chars().count() < self.min_title_chars {
                debug!("标题过短，跳过: {:?}", title);
                continue;
            }
            if !seen_urls.insert(url.to_string()) {
                debug!("重复链接，跳过: {}", url);
                continue;
            }

            articles.push(Article::from_link(
                title,
                &*url,
                self.source_name.as_str(),
                published_at.as_str(),
            ));
        }

        articles
    }

    /// 还原序列化 DOM 中的字符实体，无法识别的保持原样
    fn decode_entities<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.entity.replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => {
                    let code = match name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => name[1..].parse::<u32>().ok(),
                    };
                    code.and_then(char::from_u32)
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
    }
}
