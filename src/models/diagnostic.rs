//! Scheduling diagnostics.
//!
//! Diagnostics are the soft-failure channel of the scheduler: structured
//! warnings accumulated in order while a plan is built. They are returned
//! alongside the plan and never raised as errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Classification of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// Nothing could be placed in one term.
    NoPlacement,
    /// Placement stopped after too many consecutive empty terms.
    PlacementImpossible,
    /// Scheduling ended with courses still unplaced.
    IncompleteSchedule,
}

impl DiagnosticCode {
    /// Wire code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoPlacement => "no_placement",
            Self::PlacementImpossible => "placement_impossible",
            Self::IncompleteSchedule => "incomplete_schedule",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured, non-fatal scheduling warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl Diagnostic {
    /// Creates a diagnostic without details.
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Adds a detail entry.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Looks up a detail entry.
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }
}

/// Ordered, append-only diagnostics list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Whether any diagnostic carries the given code.
    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.entries.iter().any(|d| d.code == code)
    }

    /// Number of diagnostics with the given code.
    pub fn count_code(&self, code: DiagnosticCode) -> usize {
        self.entries.iter().filter(|d| d.code == code).count()
    }

    /// First diagnostic with the given code.
    pub fn find(&self, code: DiagnosticCode) -> Option<&Diagnostic> {
        self.entries.iter().find(|d| d.code == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
