//! Medium article scraper (via the Freedium mirror).
//!
//! Single-shot pipeline: normalize the URL to its mirror form, fetch the
//! page once, extract the article, and save it as `<safe-title>.json` plus
//! `<safe-title>.md` under the output directory.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use scrape_engine::{
    extract_article, save_article, to_mirror_url, FetchSettings, Html2MdConverter,
    ReqwestFetcher, SavedArticle, ScrapeError,
};

mod cli;
mod logging;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::initialize();
    let args = Cli::parse();

    match run(&args).await {
        Ok(saved) => {
            println!("Saved JSON: {}", saved.json_path.display());
            println!("Saved Markdown: {}", saved.markdown_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("scrape failed: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Cli) -> Result<SavedArticle, ScrapeError> {
    let mirror_url = to_mirror_url(&args.url)?;
    println!("Fetching from Freedium mirror:\n{mirror_url}\n");

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let html = fetcher.fetch(&mirror_url).await?;

    let record = extract_article(&html, &mirror_url, &Html2MdConverter)?;
    info!("scraped \"{}\" by {}", record.title, record.author);

    let saved = save_article(&record, Path::new(&args.output))?;
    Ok(saved)
}
