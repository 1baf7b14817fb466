use crate::config::{Config, OutputFormat, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Default output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Extension of configuration files
    #[arg(short, long, default_value = "aria")]
    pub extension: String,

    /// Force overwrite existing config
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = Config::path_in(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    // Create example file
    let example_file = cwd.join(format!("example.{}", args.extension));
    if !example_file.exists() {
        let example_content = r#"Everything outside the braces is ignored.
{{
    name = "example"
    enabled = true
    retries = 3
    color = 0xFF7700
    ratio = 0.56
}}
"#;
        fs::write(&example_file, example_content)?;
        println!("  {} Created {}", "✓".green(), example_file.display());
    }

    let config = Config {
        format: args.format,
        extension: args.extension,
        typed: false,
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Run: ariaconf check .");
    println!("  2. Run: ariaconf dump {} --typed", example_file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariaconf_parser::parse_block;

    #[test]
    fn test_init_writes_config_and_example() {
        let dir = tempfile::tempdir().unwrap();
        let args = InitArgs {
            format: OutputFormat::Json,
            extension: "aria".to_string(),
            force: false,
        };
        init(args, dir.path()).unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);

        let example = fs::read_to_string(dir.path().join("example.aria")).unwrap();
        let block = parse_block(&example).unwrap();
        assert_eq!(block.len(), 5);
        assert!(block.typed().is_ok());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(Config::path_in(dir.path()), r#"{ "extension": "cfg" }"#).unwrap();

        let args = InitArgs {
            format: OutputFormat::Text,
            extension: "aria".to_string(),
            force: false,
        };
        init(args, dir.path()).unwrap();
        assert_eq!(Config::load(dir.path()).unwrap().extension, "cfg");
    }
}
