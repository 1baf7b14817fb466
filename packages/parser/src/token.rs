//! Token model shared by the lexer and the parser

use serde::Serialize;
use std::fmt;

/// Byte range of an item within the original input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Empty span at `offset`
    pub fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Classification of a lexed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Quoted string, quotes and escapes kept verbatim
    String,
    Number,
    Equals,
    /// Inert filler outside of the block
    Text,
    LeftMeta,
    RightMeta,
    Bool,
    Identifier,
    EndOfInput,
}

impl ItemKind {
    /// Kinds that may appear on the right-hand side of `=`
    pub fn is_value(self) -> bool {
        matches!(self, ItemKind::Bool | ItemKind::Number | ItemKind::String)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::String => write!(f, "string"),
            ItemKind::Number => write!(f, "number"),
            ItemKind::Equals => write!(f, "'='"),
            ItemKind::Text => write!(f, "text"),
            ItemKind::LeftMeta => write!(f, "'{{{{'"),
            ItemKind::RightMeta => write!(f, "'}}}}'"),
            ItemKind::Bool => write!(f, "bool"),
            ItemKind::Identifier => write!(f, "identifier"),
            ItemKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A classified slice of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub kind: ItemKind,
    pub text: String,
    pub span: Span,
}

impl Item {
    pub fn new(kind: ItemKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn end_of_input(offset: usize) -> Self {
        Self::new(ItemKind::EndOfInput, "", Span::at(offset))
    }

    pub fn is(&self, kind: ItemKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::EndOfInput => write!(f, "EOF"),
            _ if self.text.chars().count() > 10 => {
                let head: String = self.text.chars().take(10).collect();
                write!(f, "{:?}...", head)
            }
            _ => write!(f, "{:?}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds() {
        assert!(ItemKind::Bool.is_value());
        assert!(ItemKind::Number.is_value());
        assert!(ItemKind::String.is_value());
        assert!(!ItemKind::Identifier.is_value());
        assert!(!ItemKind::Equals.is_value());
    }

    #[test]
    fn test_meta_display() {
        assert_eq!(ItemKind::LeftMeta.to_string(), "'{{'");
        assert_eq!(ItemKind::RightMeta.to_string(), "'}}'");
    }

    #[test]
    fn test_item_display_truncates() {
        let item = Item::new(ItemKind::String, "\"a long string value\"", Span::new(0, 21));
        assert_eq!(item.to_string(), "\"\\\"a long st\"...");

        let eof = Item::end_of_input(4);
        assert_eq!(eof.to_string(), "EOF");
        assert!(eof.span.is_empty());
    }
}
