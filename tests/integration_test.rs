use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use smzdm_digest::logger;
use smzdm_digest::services::load_articles;
use smzdm_digest::{
    App, AppError, Config, DigestFlow, FetchError, FetchOptions, PageContent, PageFetcher, RunState,
};

/// 返回固定页面内容的抓取器，并记录调用次数
struct StubFetcher {
    html: Option<String>,
    calls: AtomicUsize,
}

impl StubFetcher {
    fn page(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            html: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<PageContent, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(options.render_javascript);
        assert!(options.bypass_cache);
        match &self.html {
            Some(html) => Ok(PageContent {
                url: url.to_string(),
                html: html.clone(),
            }),
            None => Err(FetchError::Unsuccessful {
                message: "Page.navigate timed out".to_string(),
            }),
        }
    }
}

fn config_in(dir: &Path) -> Config {
    Config {
        output_dir: dir.join("docs"),
        ..Config::default()
    }
}

fn listing(count: usize) -> String {
    let items: String = (1..=count)
        .map(|i| {
            format!(
                r#"<li class="feed-row"><h5><a href="https://post.smzdm.com/p/a{i}/" target="_blank" onclick="track({i})">第 {i} 篇 NAS 好价文章</a></h5></li>"#
            )
        })
        .collect();
    format!("<html><body><ul id=\"feed-main-list\">{items}</ul></body></html>")
}

#[tokio::test]
async fn test_full_run_caps_and_persists() {
    logger::init();

    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let flow = DigestFlow::new(&config, StubFetcher::page(listing(20))).unwrap();

    let report = flow.run().await;

    assert_eq!(report.state, RunState::Done);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.articles, 15);

    let written = report.written.expect("应该写入文件");
    let html = fs::read_to_string(&written.html_path).unwrap();
    assert_eq!(html.matches("<article ").count(), 15);
    assert!(html.contains(r#"href="https://post.smzdm.com/p/a15/""#));
    assert!(!html.contains("https://post.smzdm.com/p/a16/"));

    let articles = load_articles(&written.json_path.expect("应该写入 JSON")).unwrap();
    let urls: Vec<String> = articles.iter().map(|a| a.url.clone()).collect();
    let expected: Vec<String> = (1..=15)
        .map(|i| format!("https://post.smzdm.com/p/a{i}/"))
        .collect();
    assert_eq!(urls, expected);
    assert!(articles.iter().all(|a| a.author == "什么值得买"));
}

#[tokio::test]
async fn test_fetch_failure_exits_one_without_writes() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let fetcher = StubFetcher::failing();
    let flow = DigestFlow::new(&config, fetcher).unwrap();

    let report = flow.run().await;

    assert_eq!(report.state, RunState::FetchFailed);
    assert_eq!(report.exit_code(), 1);
    assert!(report.written.is_none());
    assert!(matches!(report.error, Some(AppError::Fetch(_))));
    assert!(!config.html_path().exists());
    assert!(!config.json_path().exists());
}

#[tokio::test]
async fn test_write_failure_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    // 输出目录位置已被普通文件占用
    let blocker = tmp.path().join("docs");
    fs::write(&blocker, "not a directory").unwrap();
    let config = config_in(tmp.path());
    let flow = DigestFlow::new(&config, StubFetcher::page(listing(2))).unwrap();

    let report = flow.run().await;

    assert_eq!(report.state, RunState::WriteFailed);
    assert_eq!(report.exit_code(), 1);
    assert!(matches!(report.error, Some(AppError::Write(_))));
}

#[tokio::test]
async fn test_json_failure_still_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    // articles.json 位置已被目录占用
    fs::create_dir_all(config.json_path()).unwrap();
    let flow = DigestFlow::new(&config, StubFetcher::page(listing(1))).unwrap();

    let report = flow.run().await;

    assert_eq!(report.state, RunState::Done);
    assert_eq!(report.exit_code(), 0);
    assert!(config.html_path().is_file());
    assert!(report.written.unwrap().json_path.is_none());
}

#[tokio::test]
async fn test_encoded_query_string_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let page = r#"<a class="feed-title" href="https://post.smzdm.com/p/a1/?from=feed&amp;pos=1">西数红盘 Plus 12TB 好价</a>"#;
    let flow = DigestFlow::new(&config, StubFetcher::page(page)).unwrap();

    let report = flow.run().await;

    assert!(report.is_success());
    let articles = load_articles(&config.json_path()).unwrap();
    assert_eq!(articles[0].url, "https://post.smzdm.com/p/a1/?from=feed&pos=1");
    let html = fs::read_to_string(config.html_path()).unwrap();
    assert!(html.contains(r#"href="https://post.smzdm.com/p/a1/?from=feed&amp;pos=1""#));
    assert!(!html.contains("&amp;amp;"));
}

#[tokio::test]
async fn test_empty_listing_renders_placeholder() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let flow = DigestFlow::new(&config, StubFetcher::page("<html><body>维护中</body></html>")).unwrap();

    let report = flow.run().await;

    assert_eq!(report.state, RunState::Done);
    let html = fs::read_to_string(config.html_path()).unwrap();
    assert!(html.contains("暂无文章数据"));
    assert_eq!(fs::read_to_string(config.json_path()).unwrap(), "[]");
}

#[test]
fn test_fetcher_called_exactly_once() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let flow = DigestFlow::new(&config, StubFetcher::page(listing(3))).unwrap();

    let report = tokio_test::block_on(flow.run());

    assert!(report.is_success());
    assert_eq!(report.articles, 3);
    assert_eq!(flow.fetcher().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_second_run_overwrites_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    DigestFlow::new(&config, StubFetcher::page(listing(5)))
        .unwrap()
        .run()
        .await;
    DigestFlow::new(&config, StubFetcher::page(listing(2)))
        .unwrap()
        .run()
        .await;

    assert_eq!(load_articles(&config.json_path()).unwrap().len(), 2);
}

#[tokio::test]
#[ignore] // 默认忽略，需要本地 Chromium 和网络：cargo test -- --ignored
async fn test_live_run() {
    logger::init();

    let tmp = tempfile::tempdir().unwrap();
    let app = App::initialize(config_in(tmp.path()));

    let report = app.run().await.expect("运行失败");

    assert!(report.is_success(), "应该能够成功抓取并写入");
    assert!(app.config().html_path().exists());
}
