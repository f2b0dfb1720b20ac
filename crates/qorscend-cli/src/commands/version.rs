//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - pattern-based quantum source-code conversion",
        style("QORSCEND").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qorscend-convert  Conversion core (templates, patterns, validator)");
    println!("  qorscend-cli      Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/qorscend/qorscend-convert").underlined()
    );
    println!("License:    {}", style("MIT").dim());
}
