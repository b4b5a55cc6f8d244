//! CLI interface for closure-bytes

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::counter::create_counter;
use crate::inspect::{inspect_signed, DEFAULT_INDEX, DEFAULT_TEXT};

#[derive(Parser, Debug)]
#[command(name = "closure-bytes")]
#[command(about = "Closure-owned counter and byte/text indexing demos", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the successive values of a fresh counter, one per line
    Counter {
        /// Number of times to call the counter
        #[arg(short, long, default_value_t = 3)]
        calls: u64,
    },
    /// Read one byte of a text and convert it back into text
    Inspect {
        /// Text to index into
        #[arg(short, long, default_value = DEFAULT_TEXT)]
        text: String,
        /// Zero-based byte offset
        #[arg(short, long, default_value_t = DEFAULT_INDEX, allow_negative_numbers = true)]
        index: i64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Log level implied by the `-v` count
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Parse `args` and run the selected command, writing program output to `out`
pub fn run_with<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    execute(cli, out)
}

/// Run an already parsed command line
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        None => {
            info!("no subcommand given, running both demos");
            run_counter(3, out)?;
            run_inspect(DEFAULT_TEXT, DEFAULT_INDEX, false, out)?;
        }
        Some(Commands::Counter { calls }) => {
            run_counter(calls, out)?;
        }
        Some(Commands::Inspect { text, index, json }) => {
            run_inspect(&text, index, json, out)?;
        }
    }
    Ok(())
}

fn run_counter<W: Write>(calls: u64, out: &mut W) -> Result<()> {
    info!(calls, "running counter");
    let mut i = create_counter();
    for _ in 0..calls {
        writeln!(out, "{}", i())?;
    }
    Ok(())
}

fn run_inspect<W: Write>(text: &str, index: i64, json: bool, out: &mut W) -> Result<()> {
    info!(index, len = text.len(), "running inspect");
    let result = inspect_signed(text, index)
        .with_context(|| format!("Failed to inspect {:?}", text))?;

    if json {
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    } else {
        writeln!(out, "{}", result.byte_line())?;
        writeln!(out, "{}", result.text_line())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(args: &[&str]) -> Result<String> {
        let mut buf = Vec::new();
        run_with(args.iter().copied(), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_counter_custom_calls() {
        assert_eq!(output(&["closure-bytes", "counter", "--calls", "5"]).unwrap(), "1\n2\n3\n4\n5\n");
    }

    #[test]
    fn test_counter_zero_calls() {
        assert_eq!(output(&["closure-bytes", "counter", "-c", "0"]).unwrap(), "");
    }

    #[test]
    fn test_inspect_negative_index_errors() {
        let err = output(&["closure-bytes", "inspect", "--index", "-1"]).unwrap_err();
        assert!(err.root_cause().to_string().contains("out of range"));
    }

    #[test]
    fn test_log_level_from_verbosity() {
        let cli = Cli::try_parse_from(["closure-bytes", "-vv", "counter"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
        let cli = Cli::try_parse_from(["closure-bytes"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_inspect_defaults_ignore_environment() {
        std::env::set_var("CLOSURE_BYTES_INDEX", "0");
        std::env::set_var("CLOSURE_BYTES_TEXT", "xyz");
        let out = output(&["closure-bytes", "inspect"]).unwrap();
        assert_eq!(out, "byte: uint8, 101\ntext: string, e\n");
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(output(&["closure-bytes", "frobnicate"]).is_err());
    }
}
