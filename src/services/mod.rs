pub mod article_extractor;
pub mod digest_renderer;
pub mod output_writer;

pub use article_extractor::ArticleExtractor;
pub use digest_renderer::DigestRenderer;
pub use output_writer::{load_articles, OutputWriter, WrittenFiles};
