use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Warning,
}

impl MessageKind {
    /// Prefix used in rendered report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// A row-level finding and every row it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub kind: MessageKind,
    pub text: String,
    pub rows: BTreeSet<usize>,
}

impl ValidationMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>, row: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            rows: BTreeSet::from([row]),
        }
    }

    pub fn error(text: impl Into<String>, row: usize) -> Self {
        Self::new(MessageKind::Error, text, row)
    }

    pub fn warning(text: impl Into<String>, row: usize) -> Self {
        Self::new(MessageKind::Warning, text, row)
    }
}
