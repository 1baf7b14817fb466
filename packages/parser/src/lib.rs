//! ariaconf: a flat `{{ key = value }}` configuration language
//!
//! [`Lexer`] turns text into [`Item`]s, [`Parser`] assembles them into one
//! [`Statement`] per call, and [`parse_block`] drives the parser over a whole
//! block. Interpreting value text as numbers, booleans or strings is left to
//! the [`value`] module.

pub mod block;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

pub use block::{parse_block, Block};
#[cfg(feature = "pretty-errors")]
pub use error::format_errors;
pub use error::{Expected, LexError, ParseError, ParseResult};
pub use lexer::{tokenize, Lexer};
pub use parser::{Parser, Statement, ValueKind};
pub use token::{Item, ItemKind, Span};
pub use value::{classify_number, NumberClass, Value, ValueError};
