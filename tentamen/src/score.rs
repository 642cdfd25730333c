//! # Score Module - Result Computation
//!
//! Reduces the post-session question list into aggregate counts. Invoked
//! exactly once per attempt, either on explicit finish or when the
//! countdown runs out; the resulting [`Score`] is terminal and keeps the
//! full question list around for the review screen.

use serde::{Deserialize, Serialize};

use crate::parse::Question;

/// Final result of one attempt.
///
/// `correct + incorrect + skipped` always equals `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Number of questions presented in the attempt.
    pub total: usize,
    /// Questions answered with a correct option.
    pub correct: usize,
    /// Questions answered with an incorrect option.
    pub incorrect: usize,
    /// Questions left without a selected answer.
    pub skipped: usize,
    /// Wall-clock seconds from session start to completion.
    ///
    /// Measured by the caller; this differs from the countdown remainder
    /// when the attempt finishes early.
    pub time_spent_secs: u64,
    /// The questions in their final answered state, for detailed review.
    pub questions: Vec<Question>,
}

impl Score {
    /// Correct answers as a percentage of the attempt, for display.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

/// Computes the [`Score`] for a finished attempt.
///
/// A question counts as correct when its selected option is flagged
/// correct, incorrect when the selected option is not, and skipped when no
/// option was selected at all. Partial attempts are expected; skipping is
/// not an error.
pub fn score(questions: &[Question], elapsed_secs: u64) -> Score {
    let mut correct = 0;
    let mut incorrect = 0;
    let mut skipped = 0;

    for question in questions {
        match question.selected_answer() {
            Some(answer) if answer.correct => correct += 1,
            Some(_) => incorrect += 1,
            None => skipped += 1,
        }
    }

    Score {
        total: questions.len(),
        correct,
        incorrect,
        skipped,
        time_spent_secs: elapsed_secs,
        questions: questions.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn questions() -> Vec<Question> {
        parse("T\n?q0\n+a\n-b\n?q1\n+a\n-b\n?q2\n+a\n-b\n?q3\n+a\n-b")
            .unwrap()
            .questions
    }

    #[test]
    fn test_score_classification() {
        let mut questions = questions();
        questions[0].selected = Some(0); // correct
        questions[1].selected = Some(1); // incorrect
        questions[2].selected = Some(0); // correct
        // questions[3] left unanswered

        let result = score(&questions, 42);

        assert_eq!(result.total, 4);
        assert_eq!(result.correct, 2);
        assert_eq!(result.incorrect, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.time_spent_secs, 42);
        assert_eq!(result.percent(), 50.0);

        // The answered state is preserved verbatim for review
        assert_eq!(result.questions[1].selected, Some(1));
        assert_eq!(result.questions[3].selected, None);
    }

    #[test]
    fn test_score_counts_sum_to_total() {
        let mut questions = questions();

        // Every answered/unanswered combination over four questions
        for mask in 0..16u32 {
            for (index, question) in questions.iter_mut().enumerate() {
                question.selected = (mask & (1 << index) != 0).then_some(index % 2);
            }

            let result = score(&questions, 0);
            assert_eq!(
                result.correct + result.incorrect + result.skipped,
                result.total
            );
        }
    }

    #[test]
    fn test_score_empty_attempt() {
        let result = score(&[], 5);

        assert_eq!(result.total, 0);
        assert_eq!(result.skipped, 0);
        assert_eq!(result.percent(), 0.0);
        assert!(result.questions.is_empty());
    }

    #[test]
    fn test_score_all_skipped() {
        let result = score(&questions(), 60);

        assert_eq!(result.correct, 0);
        assert_eq!(result.incorrect, 0);
        assert_eq!(result.skipped, result.total);
        assert_eq!(result.percent(), 0.0);
    }
}
