use std::sync::LazyLock;

use regex::Regex;

static NOISE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^([0-9]+|Page [0-9]+)$").unwrap());
static TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^Topic:\s*(.+)$").unwrap());
static ANSWER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^Answer:\s*([a-d])[).]?\s*(.*)$").unwrap());
static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([a-d])[).]\s*(.+)$").unwrap());

/// One classified line of quiz-bank text.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// "Topic: <text>" — applies to all following questions until replaced.
    Topic(String),
    /// "Answer: <letter>" with optional trailing text. Terminates a block.
    Answer { letter: char, trailing: String },
    /// "a) <text>" or "a. <text>" — lowercase letters only.
    Option { letter: char, text: String },
    /// Anything unmatched: question body or an option continuation.
    Content(String),
    /// Bare page numbers and "Page N" markers.
    Noise,
}

/// Split raw document text into trimmed, non-empty lines and classify each.
pub fn classify_lines(text: &str) -> Vec<Line> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify)
        .collect()
}

/// Classify one trimmed line. First match wins; anything unmatched is Content.
/// Classification is line-local — a sentence that happens to start with
/// "a) " reads as an option, and there is no lookahead to save it.
pub fn classify(line: &str) -> Line {
    if NOISE_RE.is_match(line) {
        return Line::Noise;
    }

    if let Some(caps) = TOPIC_RE.captures(line) {
        return Line::Topic(caps[1].trim().to_string());
    }

    // Answer before Option: the answer line marks the end of a question
    // block, and both patterns could otherwise collide on "a)".
    if let Some(caps) = ANSWER_RE.captures(line) {
        return Line::Answer {
            letter: letter_of(&caps[1]),
            trailing: caps[2].trim().to_string(),
        };
    }

    if let Some(caps) = OPTION_RE.captures(line) {
        return Line::Option {
            letter: letter_of(&caps[1]),
            text: caps[2].trim().to_string(),
        };
    }

    Line::Content(line.to_string())
}

// Capture groups above are single ASCII letters by construction.
fn letter_of(cap: &str) -> char {
    cap.chars().next().unwrap_or('a').to_ascii_lowercase()
}
