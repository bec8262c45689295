/// Seam between extraction and the Markdown renderer, so tests can swap in
/// a canned converter.
pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> String;
}

/// Converter backed by the `html2md` crate, which covers the constructs an
/// article body uses: headings, emphasis, links, lists, block quotes, code
/// spans and blocks, and images as `![alt](src)` references.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn to_markdown(&self, html: &str) -> String {
        html2md::parse_html(html)
    }
}
