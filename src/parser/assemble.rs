use std::collections::BTreeMap;
use std::mem;

use crate::output::Question;

use super::lines::Line;

/// Accumulator for one extraction pass. The topic survives across question
/// blocks; everything else is cleared when an answer line closes a block.
struct Assembler {
    next_id: u32,
    topic: String,
    question_buf: Vec<String>,
    options: BTreeMap<char, String>,
    current_option: Option<char>,
    questions: Vec<Question>,
}

/// Fold classified lines into question records. Answer lines terminate
/// blocks; a partial block still open at end of input is discarded.
pub fn assemble_questions(lines: &[Line]) -> Vec<Question> {
    let mut asm = Assembler::new();
    for line in lines {
        asm.push(line);
    }
    asm.questions
}

impl Assembler {
    fn new() -> Self {
        Self {
            next_id: 1,
            topic: "General".to_string(),
            question_buf: Vec::new(),
            options: BTreeMap::new(),
            current_option: None,
            questions: Vec::new(),
        }
    }

    fn push(&mut self, line: &Line) {
        match line {
            Line::Noise => {}
            Line::Topic(topic) => self.topic = topic.clone(),
            Line::Option { letter, text } => {
                self.options.insert(*letter, text.clone());
                self.current_option = Some(*letter);
            }
            Line::Content(text) => self.push_content(text),
            Line::Answer { letter, trailing } => self.close_block(*letter, trailing),
        }
    }

    /// Content continues whichever element is open: the option started on an
    /// earlier line, otherwise the question body.
    fn push_content(&mut self, text: &str) {
        match self.current_option.and_then(|l| self.options.get_mut(&l)) {
            Some(buf) => {
                buf.push(' ');
                buf.push_str(text);
            }
            None => self.question_buf.push(text.to_string()),
        }
    }

    fn close_block(&mut self, letter: char, trailing: &str) {
        // Buffered option text wins; the answer line's own trailing text is
        // the fallback when the letter was never buffered.
        let answer = self
            .options
            .get(&letter)
            .filter(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| trailing.to_string());

        let question = self.question_buf.join(" ").trim().to_string();

        // Map keys are letters, so values come out in a..d order. Letters
        // never seen contribute no slot: a block with only b) and d) yields
        // a two-entry list with no record of which letters they were.
        let options: Vec<String> = mem::take(&mut self.options).into_values().collect();

        if !question.is_empty() && !options.is_empty() {
            self.questions.push(Question {
                id: self.next_id,
                topic: self.topic.clone(),
                question,
                options,
                answer,
            });
            self.next_id += 1;
        }

        self.question_buf.clear();
        self.current_option = None;
    }
}
