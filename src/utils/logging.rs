//! 日志工具模块
//!
//! 提供运行横幅和统计输出的辅助函数

use tracing::{error, info};

use crate::models::Article;

/// 记录程序启动信息
pub fn log_startup(source_url: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始爬取什么值得买内容...");
    info!("🌐 目标页面: {}", source_url);
    info!("{}", "=".repeat(60));
}

/// 记录提取到的文章列表
pub fn log_articles(articles: &[Article]) {
    info!("总共提取到 {} 篇文章", articles.len());
    for (i, article) in articles.iter().enumerate() {
        info!("{}. {}", i + 1, truncate_text(&article.title, 60));
    }
}

/// 打印最终结果
///
/// # 参数
/// - `success`: 是否成功
/// - `articles`: 文章数量
/// - `message`: 失败原因（成功时为 None）
pub fn print_final_stats(success: bool, articles: usize, message: Option<&str>) {
    info!("{}", "=".repeat(60));
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    if success {
        info!("✅ 爬取任务完成！共 {} 篇文章", articles);
    } else {
        error!("❌ 爬取任务失败: {}", message.unwrap_or("未知错误"));
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
