use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One extracted multiple-choice question. Declaration order here is the
/// field order in the serialized output.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub topic: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Render the full question set as pretty-printed JSON (2-space indent).
pub fn render_json(questions: &[Question]) -> Result<String> {
    serde_json::to_string_pretty(questions).context("failed to serialize questions")
}

pub fn write_json(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
