/// A single lettered answer choice.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Choice {
    /// Lowercase ASCII letter as written in the source.
    pub letter: char,
    /// Raw markdown content of the choice.
    pub text: String,
    pub is_correct: bool,
}

/// A single-answer multiple-choice question.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Question {
    /// Number as written in the source. Not renumbered, not necessarily unique.
    pub number: u64,
    /// Raw markdown of the question prompt (may be empty).
    pub stem: String,
    /// Choices in source order.
    pub choices: Vec<Choice>,
    /// Letter of the first choice flagged correct, if any.
    pub correct_answer: Option<char>,
}

impl Choice {
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        Self {
            letter: letter.to_ascii_lowercase(),
            text: text.into(),
            is_correct: false,
        }
    }

    pub fn correct(mut self) -> Self {
        self.is_correct = true;
        self
    }
}

impl Question {
    /// Build a question, deriving `correct_answer` from the choices.
    ///
    /// Only the first choice flagged correct is surfaced; later flags stay
    /// set on their choices but are not scored.
    pub fn new(number: u64, stem: impl Into<String>, choices: Vec<Choice>) -> Self {
        let correct_answer = choices.iter().find(|c| c.is_correct).map(|c| c.letter);
        Self {
            number,
            stem: stem.into(),
            choices,
            correct_answer,
        }
    }

    /// Look up a choice by letter. With duplicate letters the last one wins.
    pub fn choice(&self, letter: char) -> Option<&Choice> {
        let letter = letter.to_ascii_lowercase();
        self.choices.iter().rev().find(|c| c.letter == letter)
    }

    /// The choice that is scored as correct, if any.
    pub fn correct_choice(&self) -> Option<&Choice> {
        let letter = self.correct_answer?;
        self.choices.iter().find(|c| c.letter == letter && c.is_correct)
    }
}
