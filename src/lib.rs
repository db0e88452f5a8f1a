//! Science quiz: a console multiple-choice quiz with a persisted top-5
//! leaderboard.
//!
//! Questions are shuffled per attempt, answers are read line by line from
//! any `BufRead`, and scores are kept in `high_scores.json`.

pub mod error;
pub mod questions;
pub mod quiz_runner;
pub mod scores;
pub mod session;

pub use error::QuizError;
pub use questions::{Question, RandomizedQuestion, QUESTION_BANK};
pub use quiz_runner::{QuizResult, QuizRunner};
pub use scores::{ScoreEntry, ScoreStore};
pub use session::Session;
