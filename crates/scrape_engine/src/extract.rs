use chrono::Utc;
use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::article::{ArticleRecord, ImageRef};
use crate::convert::Converter;
use crate::ScrapeError;

/// Fallback title when the page carries no usable heading.
const FALLBACK_TITLE: &str = "Untitled";
/// Fallback author when no attribution link is found.
const FALLBACK_AUTHOR: &str = "Unknown";

/// The fixed CSS selectors the extractor depends on, kept together because
/// they are the first thing to break when the upstream layout changes.
struct Selectors {
    title: Selector,
    author: Selector,
    date: Selector,
    canonical: Selector,
    content: Selector,
    image: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            title: selector("h1"),
            author: selector("a[href*='@']"),
            date: selector("time"),
            canonical: selector("link[rel='canonical']"),
            content: selector(".main-content"),
            image: selector("img"),
        }
    }
}

fn selector(css: &str) -> Selector {
    // The table above is fixed and known-valid CSS; a parse failure is a
    // programming error rather than a runtime condition.
    Selector::parse(css).expect("selector table entry must parse")
}

/// Extract one [`ArticleRecord`] from the HTML fetched at `url`.
///
/// Missing optional elements fall back (title, author, date, canonical);
/// only a missing `.main-content` container aborts, since without it there
/// is no article body to convert.
pub fn extract_article(
    html: &str,
    url: &str,
    converter: &dyn Converter,
) -> Result<ArticleRecord, ScrapeError> {
    let document = Html::parse_document(html);
    let selectors = Selectors::new();

    let title = first_text(&document, &selectors.title)
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());
    let author = first_text(&document, &selectors.author)
        .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());

    // Element absent -> empty; present without a datetime attribute -> its
    // displayed text.
    let date = document
        .select(&selectors.date)
        .next()
        .map(|el| match el.value().attr("datetime") {
            Some(datetime) => datetime.to_string(),
            None => element_text(el),
        })
        .unwrap_or_default();

    let canonical = document
        .select(&selectors.canonical)
        .next()
        .and_then(|el| el.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| url.to_string());

    let content = document.select(&selectors.content).next().ok_or_else(|| {
        ScrapeError::Structure(
            "could not find the .main-content container; the Freedium layout may have changed"
                .to_string(),
        )
    })?;

    let markdown = converter.to_markdown(&content.html()).trim().to_string();

    let images = content
        .select(&selectors.image)
        .filter_map(|img| {
            let src = img.value().attr("src")?;
            if src.is_empty() {
                return None;
            }
            Some(ImageRef {
                src: src.to_string(),
                alt: img.value().attr("alt").unwrap_or_default().to_string(),
            })
        })
        .collect::<Vec<_>>();

    debug!(
        "extracted \"{title}\" by {author} ({} images, {} markdown bytes)",
        images.len(),
        markdown.len()
    );

    Ok(ArticleRecord {
        url: url.to_string(),
        title,
        author,
        date,
        canonical,
        scraped_at: Utc::now().to_rfc3339(),
        images,
        markdown,
    })
}

/// Trimmed text of the first match, dropped when empty so the caller's
/// fallback applies.
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
