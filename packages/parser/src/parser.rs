use crate::error::{Expected, ParseError, ParseResult};
use crate::lexer::Lexer;
use crate::token::{Item, ItemKind, Span};
use serde::Serialize;

/// Syntactic kind of a statement's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Bool,
    Number,
    String,
}

impl ValueKind {
    pub fn from_item_kind(kind: ItemKind) -> Option<Self> {
        match kind {
            ItemKind::Bool => Some(ValueKind::Bool),
            ItemKind::Number => Some(ValueKind::Number),
            ItemKind::String => Some(ValueKind::String),
            _ => None,
        }
    }
}

impl From<ValueKind> for ItemKind {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Bool => ItemKind::Bool,
            ValueKind::Number => ItemKind::Number,
            ValueKind::String => ItemKind::String,
        }
    }
}

/// One `key = value` assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub key: String,
    /// Value text as written, quotes and escapes included
    pub value: String,
    pub kind: ValueKind,
    pub span: Span,
}

/// Statement parser for ariaconf blocks
pub struct Parser {
    lexer: Lexer,
    buffered: Option<Item>,
    failed: Option<ParseError>,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
            buffered: None,
            failed: None,
        }
    }

    /// Parse one grammar unit.
    ///
    /// Returns `Ok(None)` when the next item is `{{` or `}}`, which callers
    /// use to find the start and end of the block. Errors are terminal: once
    /// one is returned, every later call returns it again.
    pub fn parse(&mut self) -> ParseResult<Option<Statement>> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        let result = self.parse_statement();
        if let Err(err) = &result {
            self.failed = Some(err.clone());
        }
        result
    }

    fn parse_statement(&mut self) -> ParseResult<Option<Statement>> {
        let key = self.scan()?;
        match key.kind {
            ItemKind::LeftMeta | ItemKind::RightMeta => return Ok(None),
            ItemKind::Identifier => {}
            _ => return Err(unexpected(Expected::Identifier, key)),
        }

        let equals = self.scan()?;
        if !equals.is(ItemKind::Equals) {
            return Err(unexpected(Expected::Equals, equals));
        }

        let value = self.scan()?;
        let kind = match ValueKind::from_item_kind(value.kind) {
            Some(kind) => kind,
            None => return Err(unexpected(Expected::Value, value)),
        };

        Ok(Some(Statement {
            span: Span::new(key.span.start, value.span.end),
            key: key.text,
            value: value.text,
            kind,
        }))
    }

    /// Fetch the next significant item, honoring a pushed-back one first.
    /// Text filler outside the block is skipped.
    pub fn scan(&mut self) -> ParseResult<Item> {
        if let Some(item) = self.buffered.take() {
            return Ok(item);
        }

        loop {
            let item = self.lexer.next_item()?;
            if !item.is(ItemKind::Text) {
                return Ok(item);
            }
        }
    }

    /// Push back one item so the next `scan` returns it again.
    ///
    /// Only one item can be pushed back; a second one is handed back as `Err`.
    pub fn unscan(&mut self, item: Item) -> Result<(), Item> {
        if self.buffered.is_some() {
            return Err(item);
        }
        self.buffered = Some(item);
        Ok(())
    }
}

fn unexpected(expected: Expected, item: Item) -> ParseError {
    ParseError::syntax(expected, item.text, item.kind, item.span)
}
