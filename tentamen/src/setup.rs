//! # Setup Module - Attempt Configuration
//!
//! User-chosen parameters for one attempt at a quiz: which slice of the
//! question set to draw from, how many questions to draw, the time limit,
//! and whether answer options are shuffled. Typically deserialized from a
//! settings form or a TOML config file.
//!
//! ## Usage
//!
//! ```rust
//! use tentamen::{Count, Selection, SessionSetup};
//!
//! // Everything, 10 minutes, original answer order
//! let setup = SessionSetup::default();
//!
//! // 20 random questions out of the chapter covered by questions 10..=50
//! let setup = SessionSetup {
//!     selection: Selection::Range { start: 10, end: 50 },
//!     count: Count::AtMost(20),
//!     time_limit_minutes: 15,
//!     shuffle_answers: true,
//! };
//! assert_eq!(setup.time_limit().as_secs(), 15 * 60);
//! ```

use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Which part of the parsed question set an attempt draws from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// The whole question set.
    #[default]
    All,
    /// A 1-based inclusive range of question positions.
    ///
    /// Out-of-bounds ends are clamped to the set, never rejected.
    Range { start: usize, end: usize },
}

/// How many questions an attempt presents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Count {
    /// Every candidate question.
    #[default]
    All,
    /// A uniformly random subset of at most this many questions.
    AtMost(usize),
}

/// Configuration for one attempt at a quiz.
///
/// Supplied by the host (usually from a settings form) and consumed by
/// [`prepare`](crate::prepare) and [`Session`](crate::Session). All fields
/// have defaults, so partial config files deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSetup {
    /// Which slice of the question set to draw from.
    #[serde(default)]
    pub selection: Selection,
    /// How many questions to draw from the selected slice.
    #[serde(default)]
    pub count: Count,
    /// Countdown length for the attempt, in minutes.
    #[serde(default = "default_time_limit")]
    pub time_limit_minutes: u64,
    /// Whether each question's answer options are independently shuffled.
    #[serde(default)]
    pub shuffle_answers: bool,
}

impl SessionSetup {
    /// The configured time limit as a [`Duration`].
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_minutes * 60)
    }
}

impl Default for SessionSetup {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            count: Count::default(),
            time_limit_minutes: default_time_limit(),
            shuffle_answers: false,
        }
    }
}

const fn default_time_limit() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let setup = SessionSetup::default();

        assert_eq!(setup.selection, Selection::All);
        assert_eq!(setup.count, Count::All);
        assert_eq!(setup.time_limit_minutes, 10);
        assert!(!setup.shuffle_answers);
        assert_eq!(setup.time_limit(), Duration::from_secs(600));
    }

    #[test]
    fn test_serde_round_trip() {
        let setup = SessionSetup {
            selection: Selection::Range { start: 3, end: 12 },
            count: Count::AtMost(5),
            time_limit_minutes: 25,
            shuffle_answers: true,
        };

        let toml = toml::to_string(&setup).unwrap();
        let back: SessionSetup = toml::from_str(&toml).unwrap();
        assert_eq!(back, setup);
    }

    #[test]
    fn test_serde_defaults_for_missing_fields() {
        let setup: SessionSetup = toml::from_str("").unwrap();
        assert_eq!(setup, SessionSetup::default());

        let setup: SessionSetup = toml::from_str("time_limit_minutes = 5").unwrap();
        assert_eq!(setup.time_limit_minutes, 5);
        assert_eq!(setup.count, Count::All);
    }
}
