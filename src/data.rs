use serde::{Deserialize, Serialize};

use crate::constants::source::UNLABELED_SENTINEL;
use crate::types::Sentence;

/// Gold NLI label with its wire encoding (0/1/2).
///
/// The unlabeled sentinel `-1` is deliberately not representable here; raw
/// records carry it as an `i64` and must be screened out at the boundary via
/// [`Label::from_raw`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "i8", try_from = "i8")]
pub enum Label {
    Entailment,
    Neutral,
    Contradiction,
}

impl Label {
    /// Canonical iteration order for label-keyed groups and reports.
    pub const ALL: [Label; 3] = [Label::Entailment, Label::Neutral, Label::Contradiction];

    /// Map a raw wire label to a gold label.
    ///
    /// Returns `None` for the unlabeled sentinel and for any out-of-range
    /// value, so callers drop those records before heuristics run.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Label::Entailment),
            1 => Some(Label::Neutral),
            2 => Some(Label::Contradiction),
            _ => None,
        }
    }

    /// Wire value written to JSONL output.
    pub fn as_index(self) -> i8 {
        match self {
            Label::Entailment => 0,
            Label::Neutral => 1,
            Label::Contradiction => 2,
        }
    }
}

impl From<Label> for i8 {
    fn from(label: Label) -> Self {
        label.as_index()
    }
}

impl TryFrom<i8> for Label {
    type Error = String;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        Label::from_raw(i64::from(raw)).ok_or_else(|| format!("invalid gold label {raw}"))
    }
}

/// Record as read from an example source, label still unvalidated.
///
/// `label` ranges over -1/0/1/2 where -1 marks unlabeled records that must be
/// excluded before heuristic evaluation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawExample {
    pub premise: Sentence,
    pub hypothesis: Sentence,
    pub label: i64,
}

impl RawExample {
    /// Promote the raw record to a labeled [`Example`], or `None` when the
    /// record is unlabeled (or carries an out-of-range label).
    pub fn into_labeled(self) -> Option<Example> {
        let label = Label::from_raw(self.label)?;
        Some(Example {
            premise: self.premise,
            hypothesis: self.hypothesis,
            label,
        })
    }

    /// Whether this record carries the unlabeled sentinel.
    pub fn is_unlabeled(&self) -> bool {
        self.label == UNLABELED_SENTINEL
    }
}

/// Validated, immutable NLI example. Field order matches the JSONL schema.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Example {
    /// Premise sentence.
    pub premise: Sentence,
    /// Hypothesis sentence.
    pub hypothesis: Sentence,
    /// Gold label, serialized as an integer in {0, 1, 2}.
    pub label: Label,
}
