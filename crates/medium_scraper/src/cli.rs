//! Command-line surface for the scraper.

use clap::Parser;

/// Fetch a Medium article through the Freedium mirror and save it as a
/// JSON + Markdown file pair.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Medium article URL (medium.com or freedium.cfd form)
    pub url: String,

    /// Output directory for the saved article files
    #[arg(short, long, default_value = "scraped_articles")]
    pub output: String,
}
