use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::article::ArticleRecord;
use crate::document::render_markdown_document;
use crate::filename::safe_basename;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Paths of the two files written for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArticle {
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
}

/// Ensure the output directory exists, creating it (one level only, the
/// parent must already exist) if missing. A pre-existing directory is fine;
/// a pre-existing non-directory is not.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Write content to `{dir}/{filename}` via a temp file plus rename, so an
/// interrupted write never leaves a half-written file under the final name.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;

        // Replace any previous scrape of the same title.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

/// Persist one article as `<safe-title>.json` (pretty-printed record,
/// non-ASCII kept literal) and `<safe-title>.md` (rendered document), both
/// UTF-8, into `output_dir`.
///
/// The JSON file is written first; if the Markdown write then fails, the
/// JSON file is left behind and the run is reported as failed.
pub fn save_article(
    record: &ArticleRecord,
    output_dir: &Path,
) -> Result<SavedArticle, PersistError> {
    ensure_output_dir(output_dir)?;

    let basename = safe_basename(&record.title);
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());

    let json = serde_json::to_string_pretty(record)?;
    let json_path = writer.write(&format!("{basename}.json"), &json)?;
    info!("saved JSON to {}", json_path.display());

    let markdown_path = writer.write(
        &format!("{basename}.md"),
        &render_markdown_document(record),
    )?;
    info!("saved Markdown to {}", markdown_path.display());

    Ok(SavedArticle {
        json_path,
        markdown_path,
    })
}
