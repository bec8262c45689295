use serde::{Deserialize, Serialize};

/// One image reference found inside the article's content region.
///
/// `src` is always non-empty; images without a source are dropped during
/// extraction. `alt` defaults to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// Everything scraped from a single article page.
///
/// Constructed once by [`crate::extract_article`], consumed once by
/// [`crate::save_article`], never mutated in between. Field order matches
/// the serialized JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// The mirror URL that was actually fetched.
    pub url: String,
    /// Heading text, or "Untitled" when the page has no usable heading.
    pub title: String,
    /// Attribution text, or "Unknown" when no author link was found.
    pub author: String,
    /// Machine-readable datetime if the page carries one, otherwise the
    /// displayed date text, otherwise empty.
    pub date: String,
    /// Publisher-declared original URL, falling back to the fetched URL.
    pub canonical: String,
    /// UTC timestamp (RFC 3339) taken at extraction time.
    pub scraped_at: String,
    /// Images inside the content region, in document order.
    pub images: Vec<ImageRef>,
    /// Markdown conversion of the content region, trimmed at both ends.
    pub markdown: String,
}
