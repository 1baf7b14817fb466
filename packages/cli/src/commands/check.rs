use super::{read_source, render_error};
use crate::config::Config;
use anyhow::{anyhow, Result};
use ariaconf_parser::parse_block;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input file or directory to check
    pub input: PathBuf,

    /// File extension to look for in directories (overrides config)
    #[arg(short, long)]
    pub extension: Option<String>,
}

pub fn check(args: CheckArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let extension = args.extension.unwrap_or(config.extension);

    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        find_files(&args.input, &extension)
    } else {
        return Err(anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    };

    if files.is_empty() {
        println!("{} No .{} files found", "⚠️".yellow(), extension);
        return Ok(());
    }

    let mut failed = 0;
    for file in &files {
        if !check_file(file)? {
            failed += 1;
        }
    }

    println!();
    println!("   Files checked: {}", files.len());
    if failed > 0 {
        return Err(anyhow!("{} of {} files failed", failed, files.len()));
    }

    println!("   {} No issues found!", "✓".green());
    Ok(())
}

fn check_file(path: &Path) -> Result<bool> {
    let source = read_source(path)?;
    tracing::debug!(path = %path.display(), "checking");

    match parse_block(&source) {
        Ok(block) => {
            println!(
                "  {} {} ({} statements)",
                "✓".green(),
                path.display(),
                block.len()
            );
            Ok(true)
        }
        Err(err) => {
            println!("  {} {}", "✗".red(), path.display());
            eprint!("{}", render_error(&source, path, err));
            Ok(false)
        }
    }
}

fn find_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == extension))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_files_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("a.aria"), "{{ }}").unwrap();
        std::fs::write(dir.path().join("nested/b.aria"), "{{ }}").unwrap();
        std::fs::write(dir.path().join("c.txt"), "{{ }}").unwrap();

        let files = find_files(dir.path(), "aria");
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "aria"));
    }

    #[test]
    fn test_check_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.aria");
        let bad = dir.path().join("bad.aria");
        std::fs::write(&good, "{{ on = true }}").unwrap();
        std::fs::write(&bad, "{{ a b }}").unwrap();

        assert!(check_file(&good).unwrap());
        assert!(!check_file(&bad).unwrap());
    }

    #[test]
    fn test_check_directory_fails_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.aria"), "{{ s = \"open").unwrap();

        let args = CheckArgs {
            input: dir.path().to_path_buf(),
            extension: None,
        };
        assert!(check(args, dir.path()).is_err());
    }
}
