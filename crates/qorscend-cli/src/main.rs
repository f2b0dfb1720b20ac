//! QORSCEND Command-Line Interface
//!
//! Convert quantum circuit code between SDK dialects and sanity-check
//! sources from the terminal. All conversion semantics live in
//! `qorscend-convert`; this binary only reads files, calls the core, and
//! renders results.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{convert, pairs, validate, version};

/// QORSCEND - pattern-based quantum source-code conversion
#[derive(Parser)]
#[command(name = "qorscend")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a source file between quantum SDK dialects
    Convert {
        /// Input file
        #[arg(short, long)]
        input: String,

        /// Source library (qiskit, cirq, braket)
        #[arg(short, long)]
        from: String,

        /// Target library (qiskit, cirq, braket, pennylane)
        #[arg(short, long)]
        to: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Heuristically validate a source file against a library's shape
    Validate {
        /// Input file
        #[arg(short, long)]
        input: String,

        /// Library to validate against
        #[arg(short, long)]
        library: String,
    },

    /// List supported conversion pairs
    Pairs,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Convert {
            input,
            from,
            to,
            output,
            format,
        } => convert::execute(&input, &from, &to, output.as_deref(), &format),

        Commands::Validate { input, library } => validate::execute(&input, &library),

        Commands::Pairs => {
            pairs::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
