//! # Tentamen
//!
//! A library for building quiz and self-assessment trainers: parse a
//! plain-text test definition, draw the questions for one attempt, drive a
//! timed single-question-at-a-time session, and compute the result.
//!
//! The crate is pure domain logic. It performs no I/O, starts no timers
//! and renders nothing; the host supplies the raw text, a timer tick once
//! per second, and whatever UI it likes on top of the session state.
//!
//! ## Pipeline
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tentamen::{Session, SessionSetup, parse, prepare};
//!
//! let quiz = parse("Quiz\n?2+2=?\n+4\n-3\n-5").unwrap();
//!
//! let setup = SessionSetup::default();
//! let mut rng = StdRng::seed_from_u64(0);
//! let questions = prepare(&quiz.questions, &setup, &mut rng);
//!
//! let mut session = Session::new(questions, setup.time_limit()).unwrap();
//! session.select_answer(0).unwrap();
//!
//! let score = session.finish().unwrap();
//! assert_eq!(score.correct, 1);
//! ```

pub mod parse;
pub mod score;
pub mod select;
pub mod session;
pub mod setup;
pub mod shuffle;

pub use parse::{Answer, ParseError, Question, Quiz, parse};
pub use score::{Score, score};
pub use select::prepare;
pub use session::{Session, SessionError};
pub use setup::{Count, Selection, SessionSetup};
pub use shuffle::shuffled;
