use std::fs;

use pretty_assertions::assert_eq;
use scrape_engine::{
    ensure_output_dir, save_article, ArticleRecord, AtomicFileWriter, ImageRef,
};
use tempfile::TempDir;

fn sample_record() -> ArticleRecord {
    ArticleRecord {
        url: "https://freedium.cfd/https://medium.com/@alice/my-post-123".to_string(),
        title: "Hello".to_string(),
        author: "Alice".to_string(),
        date: "2024-01-01".to_string(),
        canonical: "https://medium.com/@alice/my-post-123".to_string(),
        scraped_at: "2024-01-02T03:04:05+00:00".to_string(),
        images: vec![ImageRef {
            src: "x.png".to_string(),
            alt: "pic".to_string(),
        }],
        markdown: "Body text".to_string(),
    }
}

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn existing_output_dir_is_accepted() {
    let temp = TempDir::new().unwrap();
    ensure_output_dir(temp.path()).unwrap();
    ensure_output_dir(temp.path()).unwrap();
}

#[test]
fn non_directory_path_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("file");
    fs::write(&file_path, "x").unwrap();
    assert!(ensure_output_dir(&file_path).is_err());
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("doc.md", "hello").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("doc.md", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn saved_json_round_trips_to_an_equal_record() {
    let temp = TempDir::new().unwrap();
    let record = sample_record();

    let saved = save_article(&record, temp.path()).unwrap();
    let json = fs::read_to_string(&saved.json_path).unwrap();
    let read_back: ArticleRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(read_back, record);
}

#[test]
fn saved_json_is_pretty_printed_with_literal_non_ascii() {
    let temp = TempDir::new().unwrap();
    let mut record = sample_record();
    record.title = "Café périlleux".to_string();

    let saved = save_article(&record, temp.path()).unwrap();
    let json = fs::read_to_string(&saved.json_path).unwrap();
    assert!(json.contains("\n  \"url\""), "expected 2-space indentation");
    assert!(json.contains("Café périlleux"));
    assert!(!json.contains("\\u"));
}

#[test]
fn rendered_document_has_heading_attribution_and_body() {
    let temp = TempDir::new().unwrap();
    let record = sample_record();

    let saved = save_article(&record, temp.path()).unwrap();
    let doc = fs::read_to_string(&saved.markdown_path).unwrap();
    assert_eq!(
        doc,
        "# Hello\n\n_By Alice_  \n_Published: 2024-01-01_\n\nBody text"
    );
}

#[test]
fn output_filenames_are_derived_from_a_sanitized_title() {
    let temp = TempDir::new().unwrap();
    let mut record = sample_record();
    record.title = "A/B: Test?".to_string();

    let saved = save_article(&record, temp.path()).unwrap();
    assert_eq!(saved.json_path.file_name().unwrap(), "A_B_ Test_.json");
    assert_eq!(saved.markdown_path.file_name().unwrap(), "A_B_ Test_.md");
    assert!(saved.json_path.exists());
    assert!(saved.markdown_path.exists());
}

#[test]
fn saving_twice_overwrites_the_same_pair_of_files() {
    let temp = TempDir::new().unwrap();
    let record = sample_record();

    let first = save_article(&record, temp.path()).unwrap();
    let mut updated = record.clone();
    updated.markdown = "Revised body".to_string();
    let second = save_article(&updated, temp.path()).unwrap();

    assert_eq!(first, second);
    let doc = fs::read_to_string(&second.markdown_path).unwrap();
    assert!(doc.contains("Revised body"));
}
