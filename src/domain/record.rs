// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One row of the AI-GA dataset:
//
//   title     — the paper title, used as the grouping key
//   abstract  — free text, either human-written or generated
//   label     — 0 = original, 1 = generated
//
// The CSV column order is fixed to `title,abstract,label`, which
// is also the order serde uses when the writer emits the header.
//
// Reference: Rust Book §5 (Structs), serde derive documentation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an abstract was written by the paper's authors or generated.
///
/// Stored on disk as the integers `0` and `1`; anything else is rejected
/// when a row is deserialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    Original,
    Generated,
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Original),
            1 => Ok(Label::Generated),
            other => Err(format!("invalid label {other}, expected 0 or 1")),
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        match label {
            Label::Original  => 0,
            Label::Generated => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A single labelled abstract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Paper title — every row sharing it must land in the same split
    pub title: String,

    /// The abstract text, rewritten in place when cleaning is enabled
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    pub label: Label,
}

impl Record {
    /// Column names in on-disk order
    pub const COLUMNS: [&'static str; 3] = ["title", "abstract", "label"];

    pub fn new(
        title:         impl Into<String>,
        abstract_text: impl Into<String>,
        label:         Label,
    ) -> Self {
        Self {
            title:         title.into(),
            abstract_text: abstract_text.into(),
            label,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.label == Label::Generated
    }
}
