pub mod assemble;
pub mod lines;

use crate::output::Question;

/// Two-pass pipeline: raw text → classified lines → question records.
pub fn extract_questions(text: &str) -> Vec<Question> {
    let lines = lines::classify_lines(text);
    assemble::assemble_questions(&lines)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_fixture(name: &str) -> Vec<Question> {
        let text = std::fs::read_to_string(format!("tests/fixtures/{}.txt", name)).unwrap();
        extract_questions(&text)
    }

    #[test]
    fn wbt_sample_count_and_ids() {
        let qs = parse_fixture("wbt_sample");
        assert_eq!(qs.len(), 5);
        let ids: Vec<u32> = qs.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn wbt_sample_topics_follow_pages() {
        let qs = parse_fixture("wbt_sample");
        assert_eq!(qs[0].topic, "Brief History of the Web");
        assert_eq!(qs[1].topic, "Brief History of the Web");
        assert_eq!(qs[2].topic, "HTTP Fundamentals");
        // No topic line on the last page — the previous one carries over.
        assert_eq!(qs[4].topic, "HTTP Fundamentals");
    }

    #[test]
    fn wbt_sample_multiline_question_and_option() {
        let qs = parse_fixture("wbt_sample");
        assert_eq!(
            qs[1].question,
            "2. Which organisation hosted the first web server?"
        );
        assert_eq!(
            qs[3].options[0],
            "2xx responses such as 200 OK and 204 No Content"
        );
    }

    #[test]
    fn wbt_sample_answers_resolved_from_options() {
        let qs = parse_fixture("wbt_sample");
        assert_eq!(qs[0].answer, "Tim Berners-Lee");
        assert_eq!(qs[1].answer, "CERN");
        assert_eq!(qs[4].answer, "Content-Type");
    }

    #[test]
    fn wbt_sample_partial_options_list() {
        let qs = parse_fixture("wbt_sample");
        assert_eq!(qs[4].options, vec!["Accept", "Content-Type"]);
    }

    #[test]
    fn wbt_sample_no_noise_leak() {
        let qs = parse_fixture("wbt_sample");
        for q in &qs {
            assert!(!q.question.contains("Page"), "noise in question: {}", q.question);
            for opt in &q.options {
                assert!(!opt.contains("Page"), "noise in option: {}", opt);
            }
        }
    }
}
