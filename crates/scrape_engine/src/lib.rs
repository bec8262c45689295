//! Scrape engine: fetches one Medium article through the Freedium mirror,
//! extracts it into an [`ArticleRecord`], and persists it as a JSON + Markdown
//! file pair.
//!
//! The pipeline is strictly linear: URL -> mirror URL -> HTML -> record ->
//! two files on disk. Every failure is fatal to the run; nothing is retried.
mod article;
mod convert;
mod document;
mod error;
mod extract;
mod fetch;
mod filename;
mod mirror;
mod persist;

pub use article::{ArticleRecord, ImageRef};
pub use convert::{Converter, Html2MdConverter};
pub use document::render_markdown_document;
pub use error::ScrapeError;
pub use extract::extract_article;
pub use fetch::{FetchSettings, ReqwestFetcher};
pub use filename::safe_basename;
pub use mirror::to_mirror_url;
pub use persist::{ensure_output_dir, save_article, AtomicFileWriter, PersistError, SavedArticle};
