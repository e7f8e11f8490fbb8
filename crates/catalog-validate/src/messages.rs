//! Report assembly: message merging and final rendering.
//!
//! Messages are merged by their rendered text. Two different rules that
//! render the same text therefore share one entry; report consumers rely
//! on that shape.

use std::collections::BTreeSet;

use catalog_model::{MessageKind, ValidationMessage};
use indexmap::IndexMap;

use crate::range::format_ranges;

/// Accumulates messages of one kind, keyed by text, in first-insertion order.
#[derive(Debug, Clone)]
pub struct MessageBook {
    kind: MessageKind,
    entries: IndexMap<String, BTreeSet<usize>>,
}

impl MessageBook {
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
        }
    }

    pub fn errors() -> Self {
        Self::new(MessageKind::Error)
    }

    pub fn warnings() -> Self {
        Self::new(MessageKind::Warning)
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Adds rows to the entry for `text`, creating it if needed.
    pub fn add<I>(&mut self, text: impl Into<String>, rows: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.entries.entry(text.into()).or_default().extend(rows);
    }

    /// Adds a message. Its kind is assumed to match the book's.
    pub fn push(&mut self, message: ValidationMessage) {
        debug_assert_eq!(message.kind, self.kind, "message kind mismatch");
        self.add(message.text, message.rows);
    }

    pub fn extend<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = ValidationMessage>,
    {
        for message in messages {
            self.push(message);
        }
    }

    /// Merged messages in first-insertion order.
    pub fn messages(&self) -> Vec<ValidationMessage> {
        self.entries
            .iter()
            .map(|(text, rows)| ValidationMessage {
                kind: self.kind,
                text: text.clone(),
                rows: rows.clone(),
            })
            .collect()
    }

    /// Renders `"{Kind}: {text}. Location: {ranges}"` lines.
    pub fn render(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(text, rows)| {
                format!(
                    "{}: {}. Location: {}",
                    self.kind.label(),
                    text,
                    format_ranges(rows.iter().copied())
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_merges_rows() {
        let mut book = MessageBook::errors();
        book.push(ValidationMessage::error("ItemName is required but missing", 3));
        book.push(ValidationMessage::error("ItemName is required but missing", 7));
        book.push(ValidationMessage::error("UnitCost1 must be a numeric value", 4));

        let messages = book.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].rows, BTreeSet::from([3, 7]));
        assert_eq!(
            book.render(),
            vec![
                "Error: ItemName is required but missing. Location: row 3, row 7",
                "Error: UnitCost1 must be a numeric value. Location: row 4",
            ]
        );
    }

    #[test]
    fn test_repeated_rows_union() {
        let mut book = MessageBook::warnings();
        book.add("check", [2, 3]);
        book.add("check", [3, 4]);
        assert_eq!(book.render(), vec!["Warning: check. Location: rows 2-4"]);
    }
}
