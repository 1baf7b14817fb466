use super::{read_source, render_error};
use crate::config::{Config, OutputFormat};
use anyhow::{anyhow, Result};
use ariaconf_parser::{parse_block, Block};
use clap::Args;
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Input file to parse
    pub input: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Interpret values as booleans, integers, floats and strings
    #[arg(short, long)]
    pub typed: bool,
}

pub fn dump(args: DumpArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let format = args.format.unwrap_or(config.format);
    let typed = args.typed || config.typed;
    let source = read_source(&args.input)?;

    let block = match parse_block(&source) {
        Ok(block) => block,
        Err(err) => {
            eprint!("{}", render_error(&source, &args.input, err));
            return Err(anyhow!("Parsing {} failed", args.input.display()));
        }
    };

    if typed {
        print_typed(&block, format)
    } else {
        print_raw(&block, format)
    }
}

fn print_raw(block: &Block, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&block.statements)?),
        OutputFormat::Text => {
            for stmt in block {
                println!(
                    "{} = {}  {}",
                    stmt.key.bold(),
                    stmt.value,
                    format!("({:?})", stmt.kind).dimmed()
                );
            }
        }
    }
    Ok(())
}

fn print_typed(block: &Block, format: OutputFormat) -> Result<()> {
    let values = block.typed()?;

    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = values
                .iter()
                .map(|(key, value)| json!({ "key": key, "value": value }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            for (key, value) in &values {
                println!("{} = {}", key.bold(), value);
            }
        }
    }
    Ok(())
}
