pub mod check;
pub mod dump;
pub mod init;
pub mod tokens;

pub use check::{check, CheckArgs};
pub use dump::{dump, DumpArgs};
pub use init::{init, InitArgs};
pub use tokens::{tokens, TokensArgs};

use anyhow::{Context, Result};
use ariaconf_parser::{format_errors, ParseError};
use std::path::Path;

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}

/// Source-annotated report for a failed parse
fn render_error(source: &str, path: &Path, err: ParseError) -> String {
    format_errors(source, &path.to_string_lossy(), &[err])
}
