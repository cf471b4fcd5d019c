//! `varjson` CLI — check, render and inspect JSON documents with `$variable`
//! placeholders from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a template (stdin → stdout)
//! echo '{"user": $userId}' | varjson check
//!
//! # Reject anything after the first value
//! varjson check --strict -i template.json
//!
//! # Re-render compactly, file to file
//! varjson render -i template.json -o template.min.json
//!
//! # List placeholder names, first occurrence only
//! varjson vars --unique -i template.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;
use varjson::{Node, ParseOptions, Trailing, UnicodeEscapes};

#[derive(Parser)]
#[command(
    name = "varjson",
    version,
    about = "JSON with $variable placeholders: check, render, list variables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parser diagnostics to stderr
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and report whether it is well formed
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        flags: ParseFlags,
    },
    /// Parse the input and write its compact rendering
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        flags: ParseFlags,
    },
    /// Print the name of every variable, one per line, in document order
    Vars {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print each name only once
        #[arg(long)]
        unique: bool,
        #[command(flatten)]
        flags: ParseFlags,
    },
}

#[derive(Args)]
struct ParseFlags {
    /// Fail if anything but whitespace follows the first value
    #[arg(long)]
    strict: bool,
    /// Decode \uXXXX escapes instead of keeping them as text
    #[arg(long)]
    decode_unicode: bool,
}

impl ParseFlags {
    fn options(&self) -> ParseOptions {
        let mut options = ParseOptions::default();
        if self.strict {
            options = options.with_trailing(Trailing::Reject);
        }
        if self.decode_unicode {
            options = options.with_unicode_escapes(UnicodeEscapes::Decode);
        }
        options
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { input, flags } => {
            let node = parse_input(input.as_deref(), &flags)?;
            println!("ok: {} variable(s)", node.variables().len());
        }
        Commands::Render {
            input,
            output,
            flags,
        } => {
            let node = parse_input(input.as_deref(), &flags)?;
            let mut text = varjson::render(&node);
            text.push('\n');
            write_output(output.as_deref(), &text)?;
        }
        Commands::Vars {
            input,
            unique,
            flags,
        } => {
            let node = parse_input(input.as_deref(), &flags)?;
            let mut names = node.variables();
            if unique {
                let mut seen = std::collections::HashSet::new();
                names.retain(|name| seen.insert(*name));
            }
            for name in names {
                println!("{name}");
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug over warn.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_input(path: Option<&str>, flags: &ParseFlags) -> Result<Node> {
    let bytes = read_input(path)?;
    let source = path.unwrap_or("stdin");
    tracing::debug!(bytes = bytes.len(), source, "read input");
    varjson::parse_with(&bytes, &flags.options())
        .with_context(|| format!("Failed to parse {}", source))
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
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
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
