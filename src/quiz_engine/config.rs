//! Loading `quiz.json` and resolving the run settings.
//!
//! Precedence for `count` and `seed` is: override (environment / CLI) >
//! document field > default.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::quiz_engine::{
    error::QuizError,
    helpers::{parse_count_str, scalar_text},
    models::QuizConfig,
};

pub const DEFAULT_COUNT: f64 = 15.0;
pub const DEFAULT_INPUT: &str = "quiz.json";
pub const DEFAULT_OUTPUT: &str = "pages/quiz.generated.md";

/// Values that take precedence over the quiz document.
///
/// Kept as raw strings because they arrive from `QUIZ_COUNT` / `QUIZ_SEED`.
/// `Some("")` for the seed is meaningful: it forces unseeded sampling even
/// when the document has a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub count: Option<String>,
    pub seed: Option<String>,
}

/// Where to read the pool from and write the deck to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub root: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub overrides: Overrides,
}

impl RunOptions {
    /// Options rooted at `root` with the conventional file locations.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        RunOptions {
            input: root.join(DEFAULT_INPUT),
            output: root.join(DEFAULT_OUTPUT),
            root,
            overrides: Overrides::default(),
        }
    }

    /// Point the input at `path`, resolved against the root when relative.
    pub fn with_input(mut self, path: impl AsRef<Path>) -> Self {
        self.input = self.root.join(path);
        self
    }

    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = self.root.join(path);
        self
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// `path` relative to the root for log lines, or as given if outside it.
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

impl QuizConfig {
    /// Parse a quiz document. Only `items` is mandatory.
    pub fn from_json_str(raw: &str) -> Result<QuizConfig, QuizError> {
        let doc: Value = serde_json::from_str(raw)?;
        let items = match doc.get("items") {
            Some(Value::Array(items)) => items.clone(),
            _ => return Err(QuizError::MissingItems),
        };
        Ok(QuizConfig {
            title: scalar_text(doc.get("title")),
            count: doc.get("count").filter(|v| !v.is_null()).cloned(),
            seed: doc.get("seed").and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
            items,
        })
    }

    pub fn load(path: &Path) -> Result<QuizConfig, QuizError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| QuizError::Read { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }
}

/// Resolve the requested count. Must be finite and strictly positive.
pub fn resolve_count(config: &QuizConfig, overrides: &Overrides) -> Result<f64, QuizError> {
    let (value, raw) = match (&overrides.count, &config.count) {
        (Some(s), _) => (parse_count_str(s), s.clone()),
        (None, Some(Value::Number(n))) => (n.as_f64().unwrap_or(f64::NAN), n.to_string()),
        (None, Some(Value::String(s))) => (parse_count_str(s), s.clone()),
        (None, Some(other)) => (f64::NAN, other.to_string()),
        (None, None) => (DEFAULT_COUNT, DEFAULT_COUNT.to_string()),
    };
    if !value.is_finite() || value <= 0.0 {
        return Err(QuizError::InvalidCount(raw));
    }
    debug!(count = value, "resolved quiz count");
    Ok(value)
}

/// Resolve the seed. An empty result means unseeded sampling.
pub fn resolve_seed(config: &QuizConfig, overrides: &Overrides) -> Option<String> {
    overrides
        .seed
        .clone()
        .or_else(|| config.seed.clone())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(raw: &str) -> QuizConfig {
        QuizConfig::from_json_str(raw).unwrap()
    }

    #[test]
    fn parses_optional_fields() {
        let c = config(r#"{ "title": "Logos", "count": 4, "seed": "abc", "items": [{}] }"#);
        assert_eq!(c.title.as_deref(), Some("Logos"));
        assert_eq!(c.seed.as_deref(), Some("abc"));
        assert_eq!(c.items.len(), 1);
        assert_eq!(resolve_count(&c, &Overrides::default()).unwrap(), 4.0);
    }

    #[test]
    fn numeric_seed_is_used_as_text() {
        let c = config(r#"{ "seed": 2024, "items": [] }"#);
        assert_eq!(resolve_seed(&c, &Overrides::default()).as_deref(), Some("2024"));
    }

    #[test]
    fn items_must_be_an_array() {
        for raw in [r#"{ "items": {} }"#, r#"{ "title": "x" }"#, "[]", "null"] {
            let err = QuizConfig::from_json_str(raw).unwrap_err();
            assert!(matches!(err, QuizError::MissingItems), "{raw}: {err}");
        }
    }

    #[test]
    fn invalid_json_is_an_input_shape_error() {
        let err = QuizConfig::from_json_str("{ items: ").unwrap_err();
        assert!(matches!(err, QuizError::Json(_)));
    }

    #[test]
    fn count_defaults_to_fifteen() {
        let c = config(r#"{ "items": [] }"#);
        assert_eq!(resolve_count(&c, &Overrides::default()).unwrap(), 15.0);
    }

    #[test]
    fn override_count_wins_over_document() {
        let c = config(r#"{ "count": 4, "items": [] }"#);
        let o = Overrides { count: Some("9".into()), seed: None };
        assert_eq!(resolve_count(&c, &o).unwrap(), 9.0);
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_counts() {
        let c = config(r#"{ "count": 0, "items": [] }"#);
        let err = resolve_count(&c, &Overrides::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid quiz count: 0");

        let c = config(r#"{ "items": [] }"#);
        for raw in ["-3", "abc", "", "inf", "NaN"] {
            let o = Overrides { count: Some(raw.into()), seed: None };
            let err = resolve_count(&c, &o).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid quiz count: {raw}"));
        }

        let c = config(r#"{ "count": true, "items": [] }"#);
        assert!(resolve_count(&c, &Overrides::default()).is_err());
    }

    #[test]
    fn string_count_in_document_is_accepted() {
        let c = config(r#"{ "count": "3", "items": [] }"#);
        assert_eq!(resolve_count(&c, &Overrides::default()).unwrap(), 3.0);
    }

    #[test]
    fn empty_seed_override_disables_document_seed() {
        let c = config(r#"{ "seed": "abc", "items": [] }"#);
        let o = Overrides { count: None, seed: Some(String::new()) };
        assert_eq!(resolve_seed(&c, &o), None);
        let o = Overrides { count: None, seed: Some("zzz".into()) };
        assert_eq!(resolve_seed(&c, &o).as_deref(), Some("zzz"));
    }

    #[test]
    fn relative_paths_resolve_against_root() {
        let opts = RunOptions::new("/srv/deck").with_input("pools/logos.json");
        assert_eq!(opts.input, PathBuf::from("/srv/deck/pools/logos.json"));
        assert_eq!(opts.output, PathBuf::from("/srv/deck/pages/quiz.generated.md"));
        assert_eq!(opts.display_path(&opts.output), Path::new("pages/quiz.generated.md"));

        let opts = RunOptions::new("/srv/deck").with_input("/tmp/other.json");
        assert_eq!(opts.input, PathBuf::from("/tmp/other.json"));
    }
}
