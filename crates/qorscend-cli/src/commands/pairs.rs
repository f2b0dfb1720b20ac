//! Pairs command implementation.

use console::style;

use qorscend_convert::{Library, SUPPORTED_PAIRS};

/// Execute the pairs command.
pub fn execute() {
    println!(
        "{} Supported conversion pairs:\n",
        style("QORSCEND").cyan().bold()
    );

    for source in Library::ALL {
        let targets: Vec<&str> = SUPPORTED_PAIRS
            .iter()
            .filter(|(s, _)| *s == source)
            .map(|(_, t)| t.as_str())
            .collect();

        if targets.is_empty() {
            println!(
                "  {} {} (not a conversion source)",
                style("○").dim(),
                style(source.as_str()).dim()
            );
        } else {
            println!(
                "  {} {} → {}",
                style("●").green(),
                style(source.as_str()).bold(),
                targets.join(", ")
            );
        }
    }

    println!();
    println!("Any other pair is rejected with a structured failure.");
}
