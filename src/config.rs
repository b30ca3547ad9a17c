use std::path::PathBuf;
use std::time::Duration;

/// 程序配置
///
/// 所有常量都集中在这里，按引用传给各个组件，方便测试时替换
#[derive(Clone, Debug)]
pub struct Config {
    /// 目标列表页
    pub source_url: String,
    /// 文章链接前缀，只提取以此开头的链接
    pub link_prefix: String,
    /// 来源名称（作为默认作者）
    pub source_name: String,
    /// 页面标题
    pub site_title: String,
    /// 最多保留的文章数量
    pub max_articles: usize,
    /// 标题最少字符数（去除首尾空白后）
    pub min_title_chars: usize,
    /// 页面加载超时
    pub page_timeout: Duration,
    /// 是否执行页面 JavaScript
    pub render_javascript: bool,
    /// 是否绕过浏览器缓存
    pub bypass_cache: bool,
    /// 是否以无头模式启动浏览器
    pub headless: bool,
    /// 浏览器可执行文件路径，为空时自动查找
    pub chrome_executable: Option<PathBuf>,
    /// 输出目录
    pub output_dir: PathBuf,
    /// HTML 文件名
    pub html_filename: String,
    /// JSON 文件名
    pub json_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: "https://www.smzdm.com/fenlei/wangluocunchu/post/#feed-main".to_string(),
            link_prefix: "https://post.smzdm.com/".to_string(),
            source_name: "什么值得买".to_string(),
            site_title: "什么值得买 - 最新文章".to_string(),
            max_articles: 15,
            min_title_chars: 6,
            page_timeout: Duration::from_millis(30_000),
            render_javascript: true,
            bypass_cache: true,
            headless: true,
            chrome_executable: None,
            output_dir: PathBuf::from("docs"),
            html_filename: "index.html".to_string(),
            json_filename: "articles.json".to_string(),
        }
    }
}

impl Config {
    /// HTML 输出的完整路径
    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(&self.html_filename)
    }

    /// JSON 输出的完整路径
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_filename)
    }
}
