//! # quiz_slide_gen
//!
//! Turns a hand-maintained pool of "guess the logo / guess the text" quiz
//! items into a shuffled, reproducible Slidev deck.
//!
//! ## How it works
//!
//! 1. `quiz.json` holds the pool (`items`) plus optional `title`, `count`
//!    (default 15) and `seed`.
//! 2. The pool is sampled: with a seed, a mulberry32-driven Fisher-Yates
//!    shuffle makes the selection identical on every machine; without one,
//!    the thread-local RNG is used.
//! 3. Each selected item is validated into a typed [`Item`] and rendered as
//!    two slides: a prompt (large, no answer) and a reveal (answer heading,
//!    smaller display).
//! 4. [`run`] writes the deck to `pages/quiz.generated.md`. If anything goes
//!    wrong a "Quiz not ready" placeholder is written instead and the error
//!    is returned.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_slide_gen::{generate_document, QuizConfig};
//!
//! let config = QuizConfig::from_json_str(r#"{
//!     "title": "Name that language",
//!     "seed": "x",
//!     "items": [
//!         { "text": "A", "answer": "a" },
//!         { "text": "B", "answer": "b" },
//!         { "text": "C", "answer": "c" }
//!     ]
//! }"#).unwrap();
//!
//! let deck = generate_document(&config, 2.0, config.seed.as_deref()).unwrap();
//! assert_eq!(deck.selection.len(), 2);
//! assert!(deck.document.as_str().contains("# Name that language"));
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `quiz_slide_gen::run`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_document, run, to_answer_key, Document, Generated, ImageUnit, Item, ItemError,
    ItemErrorReason, Overrides, QuizConfig, QuizError, RunOptions, RunReport, RunSummary,
    SelectedItem, Show, SlidePair, TextUnit, Unit,
};
