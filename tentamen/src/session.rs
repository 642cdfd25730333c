//! # Session Module - Timed Attempt State Machine
//!
//! Drives one attempt at a prepared question list: single-question
//! navigation, per-question answer capture, and a one-second-granularity
//! countdown. The session owns its questions outright, so nothing it
//! mutates can reach the parsed [`Quiz`](crate::Quiz) or any other attempt.
//!
//! The session performs no I/O and starts no timers of its own. The host
//! event loop calls [`Session::tick`] once per second from whatever timer
//! source it has; when the countdown reaches zero the session finishes
//! itself and hands back the [`Score`]. Dropping a session before it
//! finishes is cancellation: no result is produced and there is nothing to
//! clean up.
//!
//! ## Usage
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tentamen::{Session, SessionSetup, parse, prepare};
//!
//! let quiz = parse("Quiz\n?2+2=?\n+4\n-3\n?Capital of France\n+Paris\n-London").unwrap();
//! let setup = SessionSetup::default();
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let questions = prepare(&quiz.questions, &setup, &mut rng);
//! let mut session = Session::new(questions, setup.time_limit()).unwrap();
//!
//! session.select_answer(0).unwrap();
//! session.next().unwrap();
//! session.select_answer(1).unwrap();
//!
//! let score = session.finish().unwrap();
//! assert_eq!(score.correct, 1);
//! assert_eq!(score.incorrect, 1);
//! ```

use thiserror::Error;
use web_time::{Duration, Instant};

use crate::parse::Question;
use crate::score::{Score, score};

/// Error raised by operations on a [`Session`].
///
/// Boundary navigation (`previous` on the first question, `next` on the
/// last) is a deliberate no-op and never errors; these variants cover the
/// cases that would otherwise corrupt state or resurrect a finished
/// attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The attempt already finished; its result has been handed out and no
    /// further mutation is permitted.
    #[error("the session is already completed")]
    Completed,

    /// The answer index does not exist on the current question.
    #[error("answer index {index} is out of bounds ({answers} answers)")]
    InvalidAnswer { index: usize, answers: usize },

    /// The question index does not exist in this attempt.
    #[error("question index {index} is out of bounds ({questions} questions)")]
    InvalidQuestion { index: usize, questions: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InProgress,
    Completed,
}

/// One timed attempt at a prepared question list.
///
/// Created from the output of [`prepare`](crate::prepare) and a time
/// limit. All mutating operations are valid only while the attempt is in
/// progress; once it completes (explicit [`finish`](Session::finish) or
/// countdown expiry via [`tick`](Session::tick)) they return
/// [`SessionError::Completed`].
///
/// The session is single-writer by design: timer ticks and user actions
/// must be serialized onto it by the host, which is the natural state of
/// affairs in a UI event loop.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    current: usize,
    remaining_secs: u64,
    started_at: Instant,
    state: State,
}

impl Session {
    /// Starts an attempt over the given questions.
    ///
    /// The countdown is initialized to the full time limit and the
    /// wall-clock start time is captured immediately. Returns `None` for an
    /// empty question list; there is nothing to attempt.
    pub fn new(questions: Vec<Question>, time_limit: Duration) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }

        Some(Self {
            questions,
            current: 0,
            remaining_secs: time_limit.as_secs(),
            started_at: Instant::now(),
            state: State::InProgress,
        })
    }

    /// Number of questions in the attempt.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; empty sessions cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question currently presented.
    pub fn current(&self) -> &Question {
        // Safety: `new` rejects empty question lists and `current` is only
        // ever set to a valid index.
        &self.questions[self.current]
    }

    /// Zero-based index of the question currently presented.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// All questions in their present answered state, for the navigation
    /// grid and live progress display.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Countdown time left, for display.
    pub fn remaining(&self) -> Duration {
        Duration::from_secs(self.remaining_secs)
    }

    /// Wall-clock time since the attempt started.
    pub fn time_elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Number of questions with a selected answer.
    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|question| question.is_answered())
            .count()
    }

    /// Answered questions as a percentage of the attempt.
    pub fn completion_percentage(&self) -> f64 {
        self.answered_count() as f64 / self.questions.len() as f64 * 100.0
    }

    /// Indices of the questions still lacking an answer.
    ///
    /// Hosts use this for the "finish with unanswered questions?"
    /// confirmation; finishing with unanswered questions is perfectly
    /// legal and scores them as skipped.
    pub fn unanswered_indices(&self) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, question)| !question.is_answered())
            .map(|(index, _)| index)
            .collect()
    }

    /// Whether the attempt has finished.
    pub fn is_completed(&self) -> bool {
        self.state == State::Completed
    }

    /// Selects an answer for the current question.
    ///
    /// Replaces any earlier pick; this is a single-choice quiz, not
    /// multi-select. Does not advance to the next question.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidAnswer`] if the index does not exist on the
    /// current question, [`SessionError::Completed`] after the attempt
    /// finished.
    pub fn select_answer(&mut self, index: usize) -> Result<(), SessionError> {
        self.guard()?;

        let question = &mut self.questions[self.current];
        if index >= question.answers.len() {
            return Err(SessionError::InvalidAnswer {
                index,
                answers: question.answers.len(),
            });
        }

        question.selected = Some(index);
        Ok(())
    }

    /// Moves to the next question; a no-op on the last one.
    pub fn next(&mut self) -> Result<(), SessionError> {
        self.guard()?;

        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
        Ok(())
    }

    /// Moves to the previous question; a no-op on the first one.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        self.guard()?;

        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    /// Jumps straight to a question, for the navigation grid.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidQuestion`] for an out-of-range index; the
    /// current position is left untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        self.guard()?;

        if index >= self.questions.len() {
            return Err(SessionError::InvalidQuestion {
                index,
                questions: self.questions.len(),
            });
        }

        self.current = index;
        Ok(())
    }

    /// Advances the countdown by one second.
    ///
    /// The host calls this once per second from its timer source. When the
    /// countdown reaches zero the attempt is finished exactly as if the
    /// user had called [`finish`](Session::finish), and the [`Score`] is
    /// returned. Ticks after completion are no-ops; the result cannot be
    /// produced twice.
    pub fn tick(&mut self) -> Option<Score> {
        if self.state == State::Completed {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            return Some(self.finalize());
        }

        None
    }

    /// Finishes the attempt and returns its [`Score`].
    ///
    /// Valid at any position with any number of questions answered;
    /// unanswered questions are scored as skipped.
    ///
    /// # Errors
    ///
    /// [`SessionError::Completed`] if the attempt already finished.
    pub fn finish(&mut self) -> Result<Score, SessionError> {
        self.guard()?;
        Ok(self.finalize())
    }

    fn finalize(&mut self) -> Score {
        self.state = State::Completed;
        score(&self.questions, self.started_at.elapsed().as_secs())
    }

    fn guard(&self) -> Result<(), SessionError> {
        match self.state {
            State::Completed => Err(SessionError::Completed),
            State::InProgress => Ok(()),
        }
    }
}
