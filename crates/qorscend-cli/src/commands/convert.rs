//! Convert command implementation.

use anyhow::{Context, Result, bail};
use console::style;
use std::fs;
use std::path::Path;

use qorscend_convert::convert_code;

/// Execute the convert command.
pub fn execute(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    format: &str,
) -> Result<()> {
    if !Path::new(input).exists() {
        bail!("File not found: {input}");
    }

    let source =
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {input}"))?;
    tracing::debug!(bytes = source.len(), "read input file");

    println!(
        "{} Converting {} from {} to {}",
        style("→").cyan().bold(),
        style(input).green(),
        style(from).yellow(),
        style(to).yellow()
    );

    let result = convert_code(from, to, &source);

    if !result.success {
        let reason = result.error.as_deref().unwrap_or("unknown failure");
        bail!("{reason}");
    }

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&result)?,
        "text" => result.code.clone().unwrap_or_default(),
        other => bail!("Unknown format: '{other}'. Available: text, json"),
    };

    if let (Some(metadata), Some(complexity)) = (&result.metadata, result.complexity) {
        println!(
            "{} Converted {} gate line{}, complexity {}",
            style("✓").green().bold(),
            metadata.gate_count,
            if metadata.gate_count == 1 { "" } else { "s" },
            style(format!("{complexity:?}").to_lowercase()).yellow()
        );
    }

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("Failed to write file: {path}"))?;
            println!("  Output: {}", style(path).green());
        }
        None => {
            println!();
            print!("{rendered}");
        }
    }

    Ok(())
}
