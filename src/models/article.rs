use serde::{Deserialize, Serialize};

/// 时间戳显示格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 一篇提取出的文章
///
/// 字段顺序即 JSON 输出顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    /// 目前始终与标题相同
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pub_date", default)]
    pub published_at: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
}

impl Article {
    /// 根据链接和标题创建文章，其余字段取默认值
    pub fn from_link(
        title: impl Into<String>,
        url: impl Into<String>,
        author: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            description: title.clone(),
            title,
            url: url.into(),
            published_at: published_at.into(),
            author: author.into(),
            price: String::new(),
            image: String::new(),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    pub fn has_price(&self) -> bool {
        !self.price.trim().is_empty()
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.url)
    }
}
