//! Records of the textual edits applied to a document.

use serde::{Deserialize, Serialize};

/// Where an edit landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// A missing root key was emitted.
    Root,
    /// Lines inserted after the given 0-based line index of the text as it
    /// was when the edit was applied.
    InsertAfter { line: usize },
    /// Lines appended to the end of the text.
    Append,
}

/// An edit applied to document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The kind of edit.
    pub kind: EditKind,
    /// Lines written by the edit.
    pub lines: Vec<String>,
}

impl Edit {
    pub fn root(line: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Root,
            lines: vec![line.into()],
        }
    }

    pub fn insert_after(line: usize, lines: Vec<String>) -> Self {
        Self {
            kind: EditKind::InsertAfter { line },
            lines,
        }
    }

    pub fn append(lines: Vec<String>) -> Self {
        Self {
            kind: EditKind::Append,
            lines,
        }
    }

    /// Number of lines this edit added
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
