//! Collects every statement of a `{{ ... }}` block

use crate::error::ParseResult;
use crate::parser::{Parser, Statement};
use crate::value::{Value, ValueError};
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// All statements of one block, in source order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    /// Latest assignment to `key`
    pub fn get(&self, key: &str) -> Option<&Statement> {
        self.statements.iter().rev().find(|stmt| stmt.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(|stmt| stmt.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Materialize every statement into a typed value
    pub fn typed(&self) -> Result<Vec<(String, Value)>, ValueError> {
        self.statements
            .iter()
            .map(|stmt| Ok((stmt.key.clone(), Value::from_statement(stmt)?)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Parse the first block of `source`. Anything after its `}}` is ignored.
#[instrument(skip(source), fields(len = source.len()))]
pub fn parse_block(source: &str) -> ParseResult<Block> {
    let mut parser = Parser::new(source);

    // consumes the opening `{{`
    parser.parse()?;
    debug!("block opened");

    let mut block = Block::default();
    while let Some(stmt) = parser.parse()? {
        trace!(key = %stmt.key, value = %stmt.value, kind = ?stmt.kind, "statement");
        block.statements.push(stmt);
    }

    debug!(statements = block.len(), "block closed");
    Ok(block)
}
