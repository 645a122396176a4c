mod config;
mod output;
mod parser;
mod pdf;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use output::Question;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = config::Settings::load();
    let questions = extract_from_pdf(Path::new(&settings.input_pdf));

    let json = output::render_json(&questions)?;
    println!("{}", json);
    output::write_json(Path::new(&settings.output_json), &json)?;

    log_topic_counts(&questions);
    println!("\nSuccessfully extracted {} questions.", questions.len());
    Ok(())
}

/// Run the full pipeline for one document. Extraction failures are logged
/// and collapse to an empty result set; only output-side errors abort.
fn extract_from_pdf(path: &Path) -> Vec<Question> {
    match pdf::read_document_text(path) {
        Ok(text) => parser::extract_questions(&text),
        Err(e) => {
            warn!("Error reading PDF {}: {:#}", path.display(), e);
            Vec::new()
        }
    }
}

fn log_topic_counts(questions: &[Question]) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for q in questions {
        *counts.entry(q.topic.as_str()).or_default() += 1;
    }
    for (topic, count) in counts {
        info!("{}: {} questions", topic, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pdf_collapses_to_empty() {
        let questions = extract_from_pdf(Path::new("tests/fixtures/no_such_file.pdf"));
        assert!(questions.is_empty());
    }
}
