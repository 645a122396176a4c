use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Pull the full text out of a PDF: per-page extraction, pages concatenated
/// in document order with a line break between them.
pub fn read_document_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| anyhow::anyhow!("failed to extract text from {}: {}", path.display(), e))?;
    info!("Extracted text from {} pages of {}", pages.len(), path.display());
    Ok(pages.join("\n"))
}
