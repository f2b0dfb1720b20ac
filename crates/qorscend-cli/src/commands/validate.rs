//! Validate command implementation.

use anyhow::{Context, Result, bail};
use console::style;
use std::fs;
use std::path::Path;

use qorscend_convert::validate_code;

/// Execute the validate command.
pub fn execute(input: &str, library: &str) -> Result<()> {
    if !Path::new(input).exists() {
        bail!("File not found: {input}");
    }

    let source =
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {input}"))?;

    let report = validate_code(library, &source);

    for warning in &report.warnings {
        println!("{} {}", style("warning:").yellow().bold(), warning);
    }
    for error in &report.errors {
        println!("{} {}", style("error:").red().bold(), error);
    }

    if report.is_valid {
        println!(
            "{} {} looks like {} code",
            style("✓").green().bold(),
            style(input).green(),
            style(library).yellow()
        );
        Ok(())
    } else {
        bail!("{input} does not look like {library} code");
    }
}
