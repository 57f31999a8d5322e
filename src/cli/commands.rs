//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::diagnostics::{self, CompileError};
use crate::{lexer, parser};

use super::token_dump;
use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MiB) to prevent memory exhaustion.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

const RULE: &str = "========================================";

/// What a run of the pipeline should do besides scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Stop after the scanner.
    pub scan_only: bool,
    /// Print the token table.
    pub show_tokens: bool,
    /// Write `<stem>_tokens.txt` next to the input.
    pub write_dump: bool,
    /// Render diagnostics with source context instead of the plain console form.
    pub pretty: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            scan_only: false,
            show_tokens: true,
            write_dump: true,
            pretty: false,
        }
    }
}

/// Read a source file with a size limit.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MiB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let display = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Error: Could not open file '{display}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Error: Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error: Could not read file '{display}': {e}")))
}

/// Scan a file and, unless `scan_only` is set, check it against the grammar.
///
/// The exit code is decided by the parser alone: lexical faults are printed but only fail the run through the
/// syntax faults they cause.
pub fn analyze_file(file_path: &Path, options: AnalyzeOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let file_name = file_path.display().to_string();

    print_banner("NetC Scanner - Lexical Analysis Phase");
    println!("Input file: {file_name}");
    println!("{RULE}");

    let lexed = lexer::lex(&source);
    if lexed.is_clean() {
        println!("\nScanning completed successfully!");
    } else {
        println!("\nScanning completed with {} error(s)", lexed.errors.len());
    }
    println!("Total tokens found: {}", lexed.tokens.len());

    if options.show_tokens {
        println!("\n====================== TOKEN LIST ======================");
        print!("{}", token_dump::format_table(&lexed.tokens));
        println!("========================================================");
    }
    report_errors(&file_name, &source, &lexed.errors, options.pretty);

    if options.write_dump {
        match token_dump::write_dump(file_path, &lexed.tokens) {
            Ok(path) => println!("\nToken list saved to: {}", path.display()),
            Err(e) => tracing::warn!(file = %file_name, error = %e, "could not write token dump"),
        }
    }

    if options.scan_only {
        return Ok(ExitCode::SUCCESS);
    }

    println!();
    print_banner("NetC Parser - Syntax Analysis Phase");
    let outcome = parser::parse(&lexed.tokens);
    report_errors(&file_name, &source, &outcome.errors, options.pretty);

    if outcome.accepted {
        println!("\nParsing completed successfully!");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\nParsing completed with errors");
        Ok(ExitCode::FAILURE)
    }
}

fn print_banner(title: &str) {
    println!("{RULE}");
    println!("{title}");
    println!("{RULE}");
}

fn report_errors(file_name: &str, source: &str, errors: &[CompileError], pretty: bool) {
    for error in errors {
        if pretty {
            eprintln!("{}", diagnostics::render_error(file_name, source, error));
        } else {
            eprintln!("{}", diagnostics::format_error(error));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("netc_cli_{}_{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{name}.netc"));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_failure() {
        let err = read_source(Path::new("definitely/not/here.netc")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("definitely/not/here.netc"));
    }

    #[test]
    fn test_accepted_file_exits_zero_and_writes_dump() {
        let path = scratch_file("accepted", "dnum x = 1;\nfeed x;\n");
        let code = analyze_file(&path, AnalyzeOptions::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let dump = fs::read_to_string(token_dump::dump_path(&path)).unwrap();
        assert!(dump.starts_with("Token Analysis for: "));
        assert!(dump.contains("DNUM"));
    }

    #[test]
    fn test_rejected_file_exits_one() {
        let path = scratch_file("rejected", "if (a < b < c) { }\n");
        let options = AnalyzeOptions {
            write_dump: false,
            ..AnalyzeOptions::default()
        };
        assert_eq!(analyze_file(&path, options).unwrap(), ExitCode::FAILURE);
        assert!(!token_dump::dump_path(&path).exists());
    }

    #[test]
    fn test_scan_only_ignores_syntax() {
        let path = scratch_file("scan_only", "} } @\n");
        let options = AnalyzeOptions {
            scan_only: true,
            write_dump: false,
            ..AnalyzeOptions::default()
        };
        assert_eq!(analyze_file(&path, options).unwrap(), ExitCode::SUCCESS);
    }
}
