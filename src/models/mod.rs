pub mod article;

pub use article::{Article, TIMESTAMP_FORMAT};
