use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Display units
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUnit {
    pub src: String,
    /// Alt text; already falls back to the unit's own answer when parsed.
    pub alt: Option<String>,
    /// Tailwind classes overriding the default prompt/reveal sizing.
    pub size_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextUnit {
    pub text: String,
}

/// One displayable fragment of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Unit {
    Image(ImageUnit),
    Text(TextUnit),
}

/// The two kinds a unit can declare through its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Image,
    Text,
}

impl UnitKind {
    pub fn parse(s: &str) -> Option<UnitKind> {
        match s {
            "image" => Some(UnitKind::Image),
            "text" => Some(UnitKind::Text),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// What a question shows: one unit, or a group revealed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Show {
    Single(Unit),
    Group(Vec<Unit>),
}

impl Show {
    pub fn units(&self) -> &[Unit] {
        match self {
            Show::Single(unit) => std::slice::from_ref(unit),
            Show::Group(units) => units,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Show::Group(_))
    }
}

/// A validated quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub answer: String,
    pub show: Show,
}

// ---------------------------------------------------------------------------
// Config / output types
// ---------------------------------------------------------------------------

/// Top-level quiz document. Items stay raw JSON until they are selected so
/// that one malformed entry only matters when it is actually drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub title: Option<String>,
    /// Raw `count` field; resolved together with the environment override.
    pub count: Option<Value>,
    pub seed: Option<String>,
    pub items: Vec<Value>,
}

/// One rendered question: prompt slide followed by reveal slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePair {
    pub prompt: String,
    pub reveal: String,
}

/// The generated slide markdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document(pub String);

impl Document {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selected item together with its position in the authored pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    pub pool_index: usize,
    pub item: Item,
}

/// Result of the pure generation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub document: Document,
    pub title: Option<String>,
    pub selection: Vec<SelectedItem>,
    pub pool_size: usize,
    pub seed: Option<String>,
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub picked: usize,
    pub total: usize,
    pub seed: Option<String>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} from {} (picked {}/{}",
            self.output.display(), self.input.display(), self.picked, self.total
        )?;
        if let Some(seed) = &self.seed {
            write!(f, ", seed={seed}")?;
        }
        write!(f, ")")
    }
}
