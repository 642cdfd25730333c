//! # Parse Module - Test Definition Parsing
//!
//! Turns a plain-text test definition into a structured [`Quiz`]. The format
//! is line-oriented and deliberately forgiving:
//!
//! ```text
//! <title line>
//! ?<question text>
//! +<correct answer text>
//! -<incorrect answer text>
//! ```
//!
//! Leading and trailing whitespace on a line is insignificant, blank lines
//! carry no meaning at all, and any line that starts with an unknown marker
//! is skipped. The only hard failure is a definition with no content.
//!
//! ## Usage
//!
//! ```rust
//! use tentamen::parse;
//!
//! let quiz = parse("Geography\n?Capital of France\n+Paris\n-London").unwrap();
//! assert_eq!(quiz.title, "Geography");
//! assert_eq!(quiz.questions.len(), 1);
//! assert!(quiz.questions[0].answers[0].correct);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a test definition cannot be parsed.
///
/// Malformed structure (stray answer markers, questions without answers,
/// unknown line markers) is tolerated by design, so the only failure mode
/// is a definition with nothing in it. Callers are expected to fall back
/// to showing the raw text when this happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no non-blank lines.
    #[error("test definition contains no content")]
    Empty,
}

/// One answer option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Display text of the option.
    pub text: String,
    /// Whether picking this option counts as a correct answer.
    pub correct: bool,
}

/// A single multiple-choice question with exactly-one-correct-answer
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identity, assigned once at parse time in emission order.
    ///
    /// Selection, subsetting and answer shuffling never reassign it, so it
    /// can always be used to refer back to the originally parsed question.
    pub id: usize,
    /// The question text.
    pub text: String,
    /// Answer options in their current presentation order.
    pub answers: Vec<Answer>,
    /// Index of the option the user picked, `None` while unanswered.
    ///
    /// Only mutated by an active [`Session`](crate::Session); always a
    /// valid index into `answers` when present.
    #[serde(default)]
    pub selected: Option<usize>,
}

impl Question {
    /// Returns the answer the user picked, if any.
    pub fn selected_answer(&self) -> Option<&Answer> {
        self.selected.and_then(|index| self.answers.get(index))
    }

    /// Returns true if an answer has been picked for this question.
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}

/// A parsed test definition: a title plus its questions in source order.
///
/// Produced once per document by [`parse`] and read-only thereafter;
/// attempts work on fresh copies derived by
/// [`prepare`](crate::prepare), never on this data directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// The first non-blank line of the definition, verbatim.
    pub title: String,
    /// Questions in emission order. May be empty for a title-only file.
    pub questions: Vec<Question>,
}

/// Parses a plain-text test definition into a [`Quiz`].
///
/// The first non-blank line is the title. After that, `?` opens a question,
/// `+` and `-` append a correct or incorrect answer to the open question,
/// and every other line is skipped. Answer lines before the first question
/// marker have nothing to attach to and are dropped, as is a question whose
/// text ends up empty.
///
/// # Errors
///
/// [`ParseError::Empty`] if the input has no non-blank lines.
pub fn parse(raw: &str) -> Result<Quiz, ParseError> {
    let mut lines = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let title = lines.next().ok_or(ParseError::Empty)?.to_string();

    let mut questions = Vec::new();
    let mut open: Option<(String, Vec<Answer>)> = None;

    for line in lines {
        if let Some(rest) = line.strip_prefix('?') {
            finalize(&mut questions, open.take());
            open = Some((rest.trim().to_string(), Vec::new()));
        } else if let Some(rest) = line.strip_prefix('+') {
            push_answer(open.as_mut(), rest, true);
        } else if let Some(rest) = line.strip_prefix('-') {
            push_answer(open.as_mut(), rest, false);
        }
        // Unknown markers are not part of the format and carry no meaning.
    }

    finalize(&mut questions, open);

    Ok(Quiz { title, questions })
}

/// Emits the open question, assigning the next sequential id.
///
/// A draft without question text never made it past a `?` marker (or the
/// marker line was empty) and is dropped along with its answers.
fn finalize(questions: &mut Vec<Question>, draft: Option<(String, Vec<Answer>)>) {
    if let Some((text, answers)) = draft
        && !text.is_empty()
    {
        questions.push(Question {
            id: questions.len(),
            text,
            answers,
            selected: None,
        });
    }
}

fn push_answer(open: Option<&mut (String, Vec<Answer>)>, text: &str, correct: bool) {
    if let Some((_, answers)) = open {
        answers.push(Answer {
            text: text.trim().to_string(),
            correct,
        });
    }
}
