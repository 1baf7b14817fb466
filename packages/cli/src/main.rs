mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, dump, init, tokens, CheckArgs, DumpArgs, InitArgs, TokensArgs};
use tracing_subscriber::EnvFilter;

/// ariaconf CLI - inspect and validate ariaconf files
#[derive(Parser, Debug)]
#[command(name = "ariaconf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default ariaconf.config.json and an example file
    Init(InitArgs),

    /// Print the token stream of a file
    Tokens(TokensArgs),

    /// Parse files and report errors
    Check(CheckArgs),

    /// Print the statements of a file
    Dump(DumpArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Tokens(args) => tokens(args, &cwd),
        Command::Check(args) => check(args, &cwd),
        Command::Dump(args) => dump(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
