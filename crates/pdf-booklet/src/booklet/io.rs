//! Document I/O for booklet conversion

use super::convert;
use crate::options::BookletOptions;
use crate::types::*;
use chrono::{Local, NaiveDateTime};
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Parse a PDF held in memory
pub fn load_pdf_bytes(bytes: &[u8]) -> Result<Document> {
    Document::load_mem(bytes).map_err(|e| BookletError::Load(e.to_string()))
}

/// Serialize a document to PDF bytes
pub fn pdf_to_bytes(mut doc: Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)
        .map_err(|e| BookletError::Serialize(e.to_string()))?;
    Ok(writer)
}

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    let doc = tokio::task::spawn_blocking(move || load_pdf_bytes(&bytes)).await??;
    Ok(doc)
}

/// Save a document
pub async fn save_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || pdf_to_bytes(doc)).await??;
    tokio::fs::write(&path, &bytes).await?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Convert a PDF file and write the booklet; returns the output page count
pub async fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &BookletOptions,
) -> Result<usize> {
    let source = load_pdf(input).await?;
    let options = options.clone();

    let booklet = tokio::task::spawn_blocking(move || convert(&source, &options)).await??;
    let page_count = booklet.get_pages().len();

    save_pdf(booklet, output).await?;
    Ok(page_count)
}

/// Output path next to `input`: `<stem>_booklet_<YYYYmmddHHMMSS>.<ext>`
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    default_output_path_at(input, Local::now().naive_local())
}

/// Same as [`default_output_path`] with an explicit timestamp
pub fn default_output_path_at(input: impl AsRef<Path>, timestamp: NaiveDateTime) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pdf".to_string());

    let file_name = format!(
        "{}_booklet_{}.{}",
        stem,
        timestamp.format("%Y%m%d%H%M%S"),
        ext
    );
    input.with_file_name(file_name)
}
