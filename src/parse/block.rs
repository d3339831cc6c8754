//! Stem/choice splitting for a single question block.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::model::{Choice, Question};

use super::fence::update_fence_state;

/// `a.`, `*B.` etc. at line start, followed by whitespace or end of line.
static CHOICE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\*?)([a-zA-Z])\.(?:\s+|$)").unwrap());

/// Where the next line of a block goes.
#[derive(Debug)]
enum BlockState<'a> {
    InStem,
    InChoice {
        letter: char,
        is_correct: bool,
        lines: Vec<&'a str>,
    },
}

/// Line-by-line accumulator for one question block.
struct BlockParser<'a> {
    state: BlockState<'a>,
    stem_lines: Vec<&'a str>,
    choices: Vec<Choice>,
    in_fence: bool,
}

impl<'a> BlockParser<'a> {
    fn new() -> Self {
        Self {
            state: BlockState::InStem,
            stem_lines: Vec::new(),
            choices: Vec::new(),
            in_fence: false,
        }
    }

    fn feed(&mut self, line: &'a str) {
        // Inside a fence nothing is structural, however it looks.
        if !self.in_fence
            && let Some(caps) = CHOICE_MARKER.captures(line)
        {
            let is_correct = !caps[1].is_empty();
            // [a-zA-Z] guarantees a single ASCII byte.
            let letter = char::from(caps[2].as_bytes()[0].to_ascii_lowercase());
            let end = caps.get(0).map_or(line.len(), |m| m.end());
            let remainder = line[end..].trim();

            self.finish_choice();
            self.state = BlockState::InChoice {
                letter,
                is_correct,
                lines: if remainder.is_empty() {
                    Vec::new()
                } else {
                    vec![remainder]
                },
            };
            // Only the remainder counts: the marker itself has no fences.
            self.in_fence = update_fence_state(remainder, self.in_fence);
            return;
        }

        match &mut self.state {
            BlockState::InStem => self.stem_lines.push(line),
            BlockState::InChoice { lines, .. } => lines.push(line),
        }
        self.in_fence = update_fence_state(line, self.in_fence);
    }

    /// Close the in-progress choice, if any, and return to the stem state.
    fn finish_choice(&mut self) {
        if let BlockState::InChoice {
            letter,
            is_correct,
            lines,
        } = std::mem::replace(&mut self.state, BlockState::InStem)
        {
            let mut choice = Choice::new(letter, lines.join("\n").trim());
            choice.is_correct = is_correct;
            self.choices.push(choice);
        }
    }

    fn finish(mut self, number: u64) -> Option<Question> {
        self.finish_choice();
        if self.choices.is_empty() {
            return None;
        }
        let stem = self.stem_lines.join("\n");
        Some(Question::new(number, stem.trim(), self.choices))
    }
}

/// Split one question block into its stem and choices.
///
/// `text` is everything after the `N.` marker up to the next question.
/// Returns `None` when the block has no choice markers outside code fences.
pub fn parse_question_block(number: u64, text: &str) -> Option<Question> {
    let mut parser = BlockParser::new();
    for line in text.trim().split('\n') {
        parser.feed(line);
    }
    parser.finish(number)
}
