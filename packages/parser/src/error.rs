//! Error types for the ariaconf lexer and parser

use crate::token::{ItemKind, Span};
use std::fmt;
use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Failure while scanning characters into items. Ends the item stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unclosed action at {offset}")]
    UnclosedAction { offset: usize },

    #[error("unterminated quoted string at {offset}")]
    UnterminatedString { offset: usize },

    #[error("bad number syntax: {text:?}")]
    BadNumber { text: String, span: Span },

    #[error("unexpected character {ch:?} at {offset}")]
    UnexpectedChar { ch: char, offset: usize },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnclosedAction { offset } => Span::at(*offset),
            LexError::UnterminatedString { offset } => Span::new(*offset, *offset + 1),
            LexError::BadNumber { span, .. } => *span,
            LexError::UnexpectedChar { ch, offset } => Span::new(*offset, *offset + ch.len_utf8()),
        }
    }
}

/// Grammar position that failed to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Identifier,
    Equals,
    Value,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Identifier => write!(f, "identifier"),
            Expected::Equals => write!(f, "equals"),
            Expected::Value => write!(f, "value (bool, number, string)"),
        }
    }
}

/// Parse error with location and context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found:?} [{kind}]")]
    Syntax {
        expected: Expected,
        found: String,
        kind: ItemKind,
        span: Span,
    },
}

impl ParseError {
    pub fn syntax(expected: Expected, found: impl Into<String>, kind: ItemKind, span: Span) -> Self {
        Self::Syntax {
            expected,
            found: found.into(),
            kind,
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::Syntax { span, .. } => *span,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lex(_))
    }
}

/// Pretty-print errors with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_errors(source: &str, filename: &str, errors: &[ParseError]) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let mut output = Vec::new();

    for error in errors {
        let span = error.span();
        let start = span.start.min(source.len());
        let end = span.end.clamp(start, source.len());

        let label = match error {
            ParseError::Lex(_) => "while scanning".to_string(),
            ParseError::Syntax { expected, .. } => format!("expected {}", expected),
        };

        let report = Report::build(ReportKind::Error, filename, start)
            .with_message(error.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_color(Color::Red)
                    .with_message(label),
            )
            .finish();

        if report
            .write((filename, Source::from(source)), &mut output)
            .is_err()
        {
            return "Error formatting failed".to_string();
        }
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}
