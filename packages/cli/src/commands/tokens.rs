use super::{read_source, render_error};
use crate::config::{Config, OutputFormat};
use anyhow::{anyhow, Result};
use ariaconf_parser::{Item, Lexer};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct TokensArgs {
    /// Input file to tokenize
    pub input: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn tokens(args: TokensArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let format = args.format.unwrap_or(config.format);
    let source = read_source(&args.input)?;

    let mut items: Vec<Item> = Vec::new();
    let mut failure = None;
    for result in Lexer::new(&source) {
        match result {
            Ok(item) => items.push(item),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }
    tracing::debug!(items = items.len(), "lexed {}", args.input.display());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
        OutputFormat::Text => {
            for item in &items {
                println!(
                    "{:>6}..{:<6} {:<14} {}",
                    item.span.start,
                    item.span.end,
                    item.kind.to_string().cyan(),
                    item
                );
            }
        }
    }

    match failure {
        Some(err) => {
            eprint!("{}", render_error(&source, &args.input, err.into()));
            Err(anyhow!("Lexing {} failed", args.input.display()))
        }
        None => Ok(()),
    }
}
