use crate::article::ArticleRecord;

/// Render the human-readable Markdown document for a scraped article:
/// heading, attribution line, publication-date line, blank line, body.
///
/// The two trailing spaces after the attribution line are a Markdown hard
/// line break.
pub fn render_markdown_document(record: &ArticleRecord) -> String {
    format!(
        "# {title}\n\n_By {author}_  \n_Published: {date}_\n\n{body}",
        title = record.title,
        author = record.author,
        date = record.date,
        body = record.markdown,
    )
}
