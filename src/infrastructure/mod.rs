pub mod page_fetcher;

pub use page_fetcher::{ChromeFetcher, FetchOptions, PageContent, PageFetcher};
