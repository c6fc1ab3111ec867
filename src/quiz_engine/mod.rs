//! Quiz engine — seeded selection, item validation, and slide rendering.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: units, items, config, document, run summary |
//! | `rng`        | Seed-string hash and the mulberry32 generator |
//! | `sampler`    | Seeded and entropy Fisher-Yates sampling behind one trait |
//! | `helpers`    | Lenient JSON scalar coercion for hand-written quiz files |
//! | `validator`  | Raw JSON item → typed [`models::Item`], with positional errors |
//! | `render`     | Slide markup: prompt/reveal pairs, title, placeholder |
//! | `config`     | `quiz.json` loading and count/seed/path resolution |
//! | `generator`  | Pure `generate_document()` — sample, validate, render |
//! | `pipeline`   | `run()` — load, generate, write, or write the placeholder |
//! | `answer_key` | JSON answer key for a generated deck |
//! | `error`      | `QuizError` / `ItemError` |

pub mod answer_key;
pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod rng;
pub mod sampler;
pub mod validator;

pub use answer_key::to_answer_key;
pub use config::{resolve_count, resolve_seed, Overrides, RunOptions};
pub use error::{ItemError, ItemErrorReason, QuizError};
pub use generator::generate_document;
pub use models::{
    Document, Generated, ImageUnit, Item, QuizConfig, RunSummary, SelectedItem, Show,
    SlidePair, TextUnit, Unit,
};
pub use pipeline::{run, RunReport};
