//! 摘要页面渲染服务 - 业务能力层
//!
//! 把文章列表拼成一个完整的静态 HTML 页面。
//! 所有插入页面的字段都会经过 HTML 转义。

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::models::{Article, TIMESTAMP_FORMAT};

/// 没有文章时显示的占位内容
pub const EMPTY_PLACEHOLDER: &str =
    r#"<div class="no-articles">暂无文章数据，请检查爬虫配置或稍后重试。</div>"#;

const STYLESHEET: &str = r#"        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; margin: 0; padding: 20px; background: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #333; border-bottom: 3px solid #ff6700; padding-bottom: 10px; }
        .update-time { color: #666; font-size: 14px; margin-bottom: 20px; }
        .articles { display: grid; gap: 20px; }
        .article { border: 1px solid #e0e0e0; border-radius: 8px; padding: 15px; background: #fafafa; transition: box-shadow 0.3s; }
        .article:hover { box-shadow: 0 4px 15px rgba(0,0,0,0.1); }
        .article-title { font-size: 18px; font-weight: bold; margin: 0 0 10px 0; }
        .article-title a { color: #333; text-decoration: none; }
        .article-title a:hover { color: #ff6700; }
        .article-meta { font-size: 12px; color: #666; margin-bottom: 10px; }
        .article-desc { color: #555; margin-bottom: 10px; }
        .article-price { color: #ff6700; font-weight: bold; font-size: 16px; }
        .article-image { max-width: 100px; height: auto; border-radius: 4px; float: right; margin-left: 10px; }
        .no-articles { text-align: center; color: #666; padding: 40px; }"#;

/// 摘要渲染器
pub struct DigestRenderer {
    site_title: String,
}

impl DigestRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            site_title: config.site_title.clone(),
        }
    }

    /// 渲染完整页面
    ///
    /// 相同的输入和生成时间得到相同的输出
    pub fn render(&self, articles: &[Article], generated_at: DateTime<Local>) -> String {
        let update_time = generated_at.format(TIMESTAMP_FORMAT).to_string();

        let body = if articles.is_empty() {
            EMPTY_PLACEHOLDER.to_string()
        } else {
            articles.iter().map(render_card).collect::<String>()
        };

        let title = escape_html(&self.site_title);
        format!(
            r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="generator" content="SMZDM Digest (chromiumoxide)">
    <meta name="updated" content="{update_time}">
    <style>
{STYLESHEET}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <div class="update-time">更新时间: {update_time}</div>
        <div class="articles">
            {body}
        </div>
    </div>
</body>
</html>"#
        )
    }
}

/// 渲染单张文章卡片
fn render_card(article: &Article) -> String {
    let title = escape_html(&article.title);
    let url = escape_html(&article.url);
    let date = escape_html(&article.published_at);
    let author = escape_html(&article.author);
    let description = escape_html(&article.description);

    let image_html = if article.has_image() {
        format!(
            r#"<img class="article-image" src="{}" alt="{title}" onerror="this.style.display='none'">"#,
            escape_html(&article.image)
        )
    } else {
        String::new()
    };

    let price_html = if article.has_price() {
        format!(
            r#"<div class="article-price">{}</div>"#,
            escape_html(article.price.trim())
        )
    } else {
        String::new()
    };

    format!(
        r#"
            <article class="article" data-title="{title}" data-url="{url}" data-date="{date}" data-author="{author}">
                {image_html}
                <h2 class="article-title">
                    <a href="{url}" target="_blank" rel="noopener">{title}</a>
                </h2>
                <div class="article-meta">
                    发布时间: {date} | 作者: {author}
                </div>
                <div class="article-desc">{description}</div>
                {price_html}
            </article>"#
    )
}

/// HTML 转义，文本和属性值都适用
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
