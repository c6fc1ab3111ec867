//! Error types for quiz generation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single item (or one of its group members) was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemErrorReason {
    #[error("must be an object")]
    NotAnObject,

    #[error("must have an \"answer\"")]
    MissingAnswer,

    #[error("must not be empty")]
    EmptyGroup,

    #[error("type=image requires \"src\"")]
    MissingSrc,

    #[error("type=text requires \"text\"")]
    MissingText,

    #[error("only supports types: image, text")]
    UnsupportedType,
}

/// An item-schema failure, located by selection position and group member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemError {
    pub index: usize,
    /// Index into `show` when the failure is inside a group.
    pub member: Option<usize>,
    pub reason: ItemErrorReason,
}

impl ItemError {
    pub fn item(index: usize, reason: ItemErrorReason) -> Self {
        ItemError { index, member: None, reason }
    }

    pub fn member(index: usize, member: usize, reason: ItemErrorReason) -> Self {
        ItemError { index, member: Some(member), reason }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "items[{}]", self.index)?;
        match (self.member, &self.reason) {
            (Some(j), reason) => write!(f, ".show[{j}] {reason}"),
            (None, ItemErrorReason::EmptyGroup) => write!(f, ".show {}", self.reason),
            (None, reason) => write!(f, " {reason}"),
        }
    }
}

impl std::error::Error for ItemError {}

/// Every way a run can end in the fallback document.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("quiz.json is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("quiz.json must have an array field \"items\"")]
    MissingItems,

    #[error("Invalid quiz count: {0}")]
    InvalidCount(String),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
