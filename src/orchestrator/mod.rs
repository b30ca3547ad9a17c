//! 编排层（Orchestration Layer）
//!
//! ```text
//! orchestrator::App (持有 Config，创建 ChromeFetcher)
//!     ↓
//! workflow::DigestFlow (fetch → extract → render → write)
//!     ↓
//! services (能力层：extractor / renderer / writer)
//!     ↓
//! infrastructure (基础设施：PageFetcher)
//! ```

pub mod app;

pub use app::App;
