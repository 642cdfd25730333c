//! # Select Module - Question Selection Engine
//!
//! Derives the question list for one attempt from a parsed question set and
//! a [`SessionSetup`]. The source set is never mutated; every attempt gets
//! independent question copies with cleared answers, so nothing a session
//! does can leak back into the parsed [`Quiz`](crate::Quiz).

use rand::Rng;

use crate::parse::Question;
use crate::setup::{Count, Selection, SessionSetup};
use crate::shuffle::shuffled;

/// Builds the ordered question list for one attempt.
///
/// Three steps, in this order:
///
/// 1. **Range filter**: with [`Selection::Range`], keep the 1-based
///    inclusive interval, clamped to the bounds of the set.
/// 2. **Count selection**: with [`Count::AtMost`], draw a uniformly random
///    subset of that size (shuffle, take a prefix), then re-sort it by
///    ascending id. Randomness picks *which* questions appear, not the
///    order they appear in.
/// 3. **Answer shuffling**: with `shuffle_answers`, permute every selected
///    question's answers independently.
///
/// Every returned question starts with `selected` cleared, regardless of
/// any state left over on the source from an earlier attempt.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tentamen::{Count, Selection, SessionSetup, parse, prepare};
///
/// let quiz = parse("T\n?a\n+1\n?b\n+1\n?c\n+1\n?d\n+1").unwrap();
/// let setup = SessionSetup {
///     count: Count::AtMost(2),
///     ..SessionSetup::default()
/// };
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let drawn = prepare(&quiz.questions, &setup, &mut rng);
/// assert_eq!(drawn.len(), 2);
/// assert!(drawn[0].id < drawn[1].id);
/// ```
pub fn prepare(questions: &[Question], setup: &SessionSetup, rng: &mut impl Rng) -> Vec<Question> {
    let mut picked = match setup.selection {
        Selection::All => questions.to_vec(),
        Selection::Range { start, end } => {
            // 1-based inclusive bounds, clamped into the set
            let start = start.max(1) - 1;
            let end = end.min(questions.len());
            if start >= end {
                Vec::new()
            } else {
                questions[start..end].to_vec()
            }
        }
    };

    if let Count::AtMost(count) = setup.count
        && picked.len() > count
    {
        picked = shuffled(&picked, rng);
        picked.truncate(count);
        // Random selection, not random presentation order
        picked.sort_by_key(|question| question.id);
    }

    for question in &mut picked {
        if setup.shuffle_answers {
            question.answers = shuffled(&question.answers, rng);
        }
        question.selected = None;
    }

    picked
}
