use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cstrip_core::{ConvertOptions, convert};
use cstrip_textio::{TextEncoding, read_text, write_utf8};
use log::debug;

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "cstrip",
    version,
    about = "Remove /* ... */ comments from a C source file, keeping string and char literals intact"
)]
struct Cli {
    /// Source file to read.
    input: PathBuf,

    /// File to write the stripped UTF-8 text to (overwritten).
    output: PathBuf,

    /// Encoding of the input file. `latin1` accepts any byte sequence.
    #[arg(long, value_enum, default_value_t = InputEncoding::Latin1)]
    input_encoding: InputEncoding,

    /// Keep CR+LF line endings instead of converting them to LF.
    #[arg(long)]
    keep_crlf: bool,

    /// Print a one-line summary to stderr.
    #[arg(long, short)]
    verbose: bool,
}

/// Input encoding for the CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputEncoding {
    /// ISO-8859-1: every byte is one character.
    Latin1,
    /// Strict UTF-8; invalid input is an error.
    Utf8,
}

impl From<InputEncoding> for TextEncoding {
    fn from(e: InputEncoding) -> Self {
        match e {
            InputEncoding::Latin1 => TextEncoding::Latin1,
            InputEncoding::Utf8 => TextEncoding::Utf8,
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("{:?}", cli);
    cmd_strip(&cli)
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_strip(cli: &Cli) -> Result<()> {
    let input = read_text(&cli.input, cli.input_encoding.into())
        .context("could not load input file")?;

    let mut options = ConvertOptions::default();
    options.normalize_line_endings = !cli.keep_crlf;
    let converted = convert(&input, &options);

    write_utf8(&cli.output, &converted.text).context("could not save output file")?;

    if cli.verbose {
        let stats = converted.stats;
        eprintln!(
            "{} -> {}: {} comment(s) removed, {} -> {} bytes",
            cli.input.display(),
            cli.output.display(),
            stats.comments_removed,
            input.len(),
            converted.text.len()
        );
    }

    Ok(())
}
