//! `seseg` CLI — compose class name strings from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Compose literal arguments
//! seseg join btn btn-primary "  rounded  "
//!
//! # Treat each argument as JSON
//! seseg join --json '"btn"' '{"active": true, "disabled": false}'
//!
//! # Compose a JSON document (stdin → stdout)
//! echo '["btn", {"active": true}]' | seseg compose
//!
//! # One output line per JSON Lines input line, with custom reserved keys
//! seseg compose --lines --reserved-key tw -i classes.jsonl -o classes.txt
//!
//! # Token statistics
//! seseg stats -i classes.json
//! ```
//!
//! Set `RUST_LOG=seseg=debug` to see diagnostic output on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seseg_core::{ClassValue, Composer};
use std::collections::HashSet;
use std::io::{self, Read};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "seseg",
    version,
    about = "Compose space-separated class name strings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose positional arguments into a class string
    Join {
        /// Values to compose, in order
        values: Vec<String>,
        /// Parse each value as JSON instead of literal text
        #[arg(long)]
        json: bool,
        /// Reserved keys whose values are expanded (default: class, className)
        #[arg(long = "reserved-key")]
        reserved_keys: Vec<String>,
    },
    /// Compose a JSON document into a class string
    Compose {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Treat the input as JSON Lines and compose each line separately
        #[arg(long)]
        lines: bool,
        /// Reserved keys whose values are expanded (default: class, className)
        #[arg(long = "reserved-key")]
        reserved_keys: Vec<String>,
    },
    /// Show token statistics for a composed JSON document
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Join {
            values,
            json,
            reserved_keys,
        } => {
            let composer = build_composer(reserved_keys);
            let args = if json {
                values
                    .iter()
                    .map(|raw| {
                        serde_json::from_str::<serde_json::Value>(raw)
                            .map(ClassValue::from)
                            .with_context(|| format!("Failed to parse argument as JSON: {}", raw))
                    })
                    .collect::<Result<Vec<_>>>()?
            } else {
                values.into_iter().map(ClassValue::from).collect()
            };
            debug!(arguments = args.len(), json, "composing arguments");
            println!("{}", composer.compose(&args));
        }
        Commands::Compose {
            input,
            output,
            lines,
            reserved_keys,
        } => {
            let composer = build_composer(reserved_keys);
            let source = read_input(input.as_deref())?;

            let composed = if lines {
                compose_lines(&composer, &source)?
            } else {
                composer
                    .compose_json(&source)
                    .context("Failed to compose JSON input")?
            };

            write_output(output.as_deref(), &composed)?;
        }
        Commands::Stats { input } => {
            let source = read_input(input.as_deref())?;
            let composed = seseg_core::compose_json(&source).context("Failed to compose JSON input")?;
            let stats = TokenStats::of(&composed);
            println!("Tokens:     {}", stats.total);
            println!("Distinct:   {}", stats.distinct);
            println!("Duplicates: {}", stats.total - stats.distinct);
            println!("Length:     {} bytes", composed.len());
        }
    }

    Ok(())
}

/// Install a stderr subscriber when `RUST_LOG` is set; stay silent otherwise.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Build a composer from `--reserved-key` flags.
///
/// No flags keeps the default reserved keys.
fn build_composer(reserved_keys: Vec<String>) -> Composer {
    if reserved_keys.is_empty() {
        Composer::default()
    } else {
        debug!(?reserved_keys, "using custom reserved keys");
        Composer::new().with_reserved_keys(reserved_keys)
    }
}

/// Compose each non-blank line as its own JSON document.
///
/// Blank lines are skipped; errors name the 1-based line number.
fn compose_lines(composer: &Composer, source: &str) -> Result<String> {
    let mut out = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let composed = composer
            .compose_json(line)
            .with_context(|| format!("Failed to compose JSON on line {}", index + 1))?;
        out.push(composed);
    }
    debug!(documents = out.len(), "composed JSON lines");
    Ok(out.join("\n"))
}

struct TokenStats {
    total: usize,
    distinct: usize,
}

impl TokenStats {
    fn of(composed: &str) -> Self {
        let tokens: Vec<&str> = composed.split_whitespace().collect();
        let distinct = tokens.iter().collect::<HashSet<_>>().len();
        Self {
            total: tokens.len(),
            distinct,
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path, "reading input file");
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            debug!(path, bytes = content.len(), "wrote output file");
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
