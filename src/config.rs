use serde::Deserialize;
use tracing::warn;

/// Settings file stem, resolved against the working directory. Any format
/// the config crate understands works: extractor.toml, extractor.json, ...
const SETTINGS_FILE: &str = "extractor";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Source quiz-bank PDF.
    pub input_pdf: String,
    /// Destination for the serialized question records.
    pub output_json: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_pdf: "5.WBT MCQ bank.pdf".to_string(),
            output_json: "extracted_questions.json".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the optional settings file. A missing file means
    /// defaults; an invalid one is logged and treated the same.
    pub fn load() -> Self {
        let built = config::Config::builder()
            .add_source(config::File::with_name(SETTINGS_FILE).required(false))
            .build();
        match built.and_then(|c| c.try_deserialize::<Settings>()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings file {}: {}", SETTINGS_FILE, e);
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.input_pdf, "5.WBT MCQ bank.pdf");
        assert_eq!(s.output_json, "extracted_questions.json");
    }
}
