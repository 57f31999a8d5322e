//! CLI module for the NetC toolchain
//!
//! `netc <input-file> [-s|--scan-only] [-p|--parse-only] [--pretty] [--no-dump]`
//!
//! ## Modules
//!
//! - `commands` - The scan/parse pipeline and source loading
//! - `token_dump` - Token table rendering and the `<stem>_tokens.txt` dump
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod token_dump;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;

use commands::AnalyzeOptions;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and syntax checker for the NetC language
#[derive(Parser, Debug)]
#[command(name = "netc")]
#[command(version = VERSION)]
#[command(about = "Scanner and syntax checker for the NetC language", long_about = None)]
pub struct Cli {
    /// NetC source file to analyze
    #[arg(value_name = "INPUT_FILE")]
    pub file: PathBuf,

    /// Scan only; do not run the parser
    #[arg(short = 's', long = "scan-only", conflicts_with = "parse_only")]
    pub scan_only: bool,

    /// Scan and parse without listing tokens or writing the dump file
    #[arg(short = 'p', long = "parse-only")]
    pub parse_only: bool,

    /// Show diagnostics with the offending source line
    #[arg(long)]
    pub pretty: bool,

    /// Do not write `<stem>_tokens.txt`
    #[arg(long = "no-dump")]
    pub no_dump: bool,
}

impl Cli {
    pub fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            scan_only: self.scan_only,
            show_tokens: !self.parse_only,
            write_dump: !self.parse_only && !self.no_dump,
            pretty: self.pretty,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(clap_exit_code(&e).0);
        }
    };

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Help and version requests succeed; every other argument error is a usage error (1, not clap's 2).
fn clap_exit_code(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    tracing::debug!(file = %cli.file.display(), ?cli, "starting analysis");
    commands::analyze_file(&cli.file, cli.analyze_options())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file_only() {
        let cli = Cli::try_parse_from(["netc", "prog.netc"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("prog.netc"));
        assert_eq!(cli.analyze_options(), AnalyzeOptions::default());
    }

    #[test]
    fn test_cli_parse_scan_only() {
        let cli = Cli::try_parse_from(["netc", "prog.netc", "-s"]).unwrap();
        assert!(cli.analyze_options().scan_only);

        let cli = Cli::try_parse_from(["netc", "--scan-only", "prog.netc"]).unwrap();
        assert!(cli.scan_only);
    }

    #[test]
    fn test_cli_parse_only_suppresses_listing_and_dump() {
        let cli = Cli::try_parse_from(["netc", "prog.netc", "--parse-only"]).unwrap();
        let options = cli.analyze_options();
        assert!(!options.show_tokens);
        assert!(!options.write_dump);
        assert!(!options.scan_only);
    }

    #[test]
    fn test_cli_no_dump_keeps_listing() {
        let cli = Cli::try_parse_from(["netc", "prog.netc", "--no-dump", "--pretty"]).unwrap();
        let options = cli.analyze_options();
        assert!(options.show_tokens);
        assert!(!options.write_dump);
        assert!(options.pretty);
    }

    #[test]
    fn test_usage_errors_exit_one() {
        let missing = Cli::try_parse_from(["netc"]).unwrap_err();
        assert_eq!(clap_exit_code(&missing), ExitCode::FAILURE);

        let extra = Cli::try_parse_from(["netc", "a.netc", "b.netc"]).unwrap_err();
        assert_eq!(clap_exit_code(&extra), ExitCode::FAILURE);

        let both = Cli::try_parse_from(["netc", "a.netc", "-s", "-p"]).unwrap_err();
        assert_eq!(clap_exit_code(&both), ExitCode::FAILURE);
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let help = Cli::try_parse_from(["netc", "--help"]).unwrap_err();
        assert_eq!(clap_exit_code(&help), ExitCode::SUCCESS);

        let version = Cli::try_parse_from(["netc", "--version"]).unwrap_err();
        assert_eq!(clap_exit_code(&version), ExitCode::SUCCESS);
    }
}
