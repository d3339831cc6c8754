//! Markdown exam parsing.
//!
//! The exam format is line oriented:
//!
//! ````text
//! 1. What is the output of the following code?
//!
//!    ```python
//!    print("Hello, World!")
//!    ```
//!
//!    a. Hello
//!    *b. Hello, World!
//!    c. Error
//! ````
//!
//! - A question starts with `N.` at the beginning of a line.
//! - A choice starts with a letter and a period; a leading `*` marks it correct.
//! - Lines inside a ```` ``` ```` fence are never structural, so sample code
//!   containing `a. something` stays in the stem or choice it belongs to.
//!
//! Parsing is total: malformed lines fold into the surrounding stem or
//! choice, and blocks without choices are dropped.

mod block;
mod fence;

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::model::Question;

pub use block::parse_question_block;
pub use fence::{FENCE, update_fence_state};

/// `N.` at line start, followed by whitespace on the same line or end of line.
static QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(\d+)\.(?:[ \t\r]+|$)").unwrap());

/// Parse a markdown exam into its questions, in source order.
///
/// # Examples
///
/// ```
/// use mdqti::parse::parse_exam;
///
/// let questions = parse_exam("1. What is 2 + 2?\n   a. 3\n   *b. 4\n   c. 5\n");
/// assert_eq!(questions.len(), 1);
/// assert_eq!(questions[0].correct_answer, Some('b'));
/// ```
pub fn parse_exam(markdown: &str) -> Vec<Question> {
    let markers: Vec<_> = QUESTION_MARKER.captures_iter(markdown).collect();
    let mut questions = Vec::with_capacity(markers.len());

    for (i, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // Numbers too large for u64 saturate rather than abort the parse.
        let number = digits.as_str().parse().unwrap_or(u64::MAX);
        let end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(markdown.len(), |m| m.start());

        match parse_question_block(number, &markdown[whole.end()..end]) {
            Some(question) => {
                tracing::debug!(
                    number,
                    choices = question.choices.len(),
                    correct = ?question.correct_answer,
                    "parsed question"
                );
                questions.push(question);
            }
            None => tracing::debug!(number, "dropping question block without choices"),
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Choice;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_question_with_correct_answer() {
        let markdown = "
1. What is 2 + 2?
   a. 3
   *b. 4
   c. 5
   d. 6
";
        let questions = parse_exam(markdown);

        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.number, 1);
        assert_eq!(q.stem, "What is 2 + 2?");
        assert_eq!(q.choices.len(), 4);
        assert_eq!(q.correct_answer, Some('b'));
        assert_eq!(q.choices[0], Choice::new('a', "3"));
        assert_eq!(q.choices[1], Choice::new('b', "4").correct());
    }

    #[test]
    fn test_multiple_questions() {
        let markdown = "
1. Question one
   a. A
   *b. B

2. Question two
   *a. A
   b. B
";
        let questions = parse_exam(markdown);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].number, 1);
        assert_eq!(questions[0].correct_answer, Some('b'));
        assert_eq!(questions[1].number, 2);
        assert_eq!(questions[1].correct_answer, Some('a'));
    }

    #[test]
    fn test_numbers_kept_as_written() {
        let questions = parse_exam("7. First\na. x\n\n7. Again\nb. y\n\n3. Third\nc. z");
        let numbers: Vec<u64> = questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![7, 7, 3]);
    }

    #[test]
    fn test_code_block_in_stem() {
        let markdown = r#"
1. What is the output of the following code?

   ```python
   print("Hello")
   ```

   a. Hello
   *b. "Hello"
   c. Error
"#;
        let questions = parse_exam(markdown);

        assert_eq!(questions.len(), 1);
        assert!(questions[0].stem.contains("```python"));
        assert!(questions[0].stem.contains(r#"print("Hello")"#));
        assert_eq!(questions[0].choices.len(), 3);
    }

    #[test]
    fn test_code_block_in_choice() {
        let markdown = r#"
1. Which function prints to stdout?

   a. Using echo
      ```python
      echo("text")
      ```
   *b. Using print
       ```python
       print("text")
       ```
   c. log("text")
"#;
        let questions = parse_exam(markdown);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].choices.len(), 3);
        assert!(questions[0].choices[0].text.contains("echo"));
        assert!(questions[0].choices[1].is_correct);
    }

    #[test]
    fn test_inline_code_kept_raw() {
        let questions = parse_exam("1. What does `len([1,2,3])` return?\n   *a. 3\n   b. 6\n");
        assert!(questions[0].stem.contains("`len([1,2,3])`"));
    }

    #[test]
    fn test_multiline_stem() {
        let markdown = "
1. Consider the following scenario:
   A user wants to sort a list.
   What method should they use?
   a. list.sort()
   *b. sorted(list)
";
        let questions = parse_exam(markdown);
        assert!(questions[0].stem.starts_with("Consider the following scenario:"));
        assert!(questions[0].stem.contains("A user wants to sort a list."));
    }

    #[test]
    fn test_no_correct_answer_marked() {
        let questions = parse_exam("1. A question\n   a. Option A\n   b. Option B\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, None);
    }

    #[test]
    fn test_two_correct_markers_first_wins() {
        let questions = parse_exam("1. Pick\n*a. one\n*b. two\n");
        let q = &questions[0];
        assert_eq!(q.correct_answer, Some('a'));
        assert!(q.choices[0].is_correct);
        assert!(q.choices[1].is_correct);
    }

    #[test]
    fn test_question_without_choices_dropped() {
        let questions = parse_exam("1. No choices here\n\n2. Real\n   a. yes\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, 2);
    }

    #[test]
    fn test_indented_question_marker() {
        let questions = parse_exam("  12. Indented\n  a. x\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, 12);
    }

    #[test]
    fn test_marker_at_end_of_input() {
        let questions = parse_exam("1. Q\na. x\n2.");
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_empty_and_plain_input() {
        assert!(parse_exam("").is_empty());
        assert!(parse_exam("This is just some text without any questions.").is_empty());
    }

    #[test]
    fn test_bare_marker_does_not_hide_next_marker() {
        let questions = parse_exam("1.\n  2. Second\n  a. x\n");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, 2);
        assert_eq!(questions[0].stem, "Second");
    }

    #[test]
    fn test_bare_marker_between_questions() {
        let questions = parse_exam("1. First\n   a. y\n  2.\n   3. Third\n   a. z\n");

        let numbers: Vec<u64> = questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(questions[1].stem, "Third");
    }

    #[test]
    fn test_crlf_marker() {
        let questions = parse_exam("1.\r\nStem\r\na. x\r\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].stem, "Stem");
    }

    #[test]
    fn test_huge_number_saturates() {
        let questions = parse_exam("99999999999999999999999. Q\na. x\n");
        assert_eq!(questions[0].number, u64::MAX);
    }
}
