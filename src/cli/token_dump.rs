//! Token table rendering and the `<stem>_tokens.txt` dump file.
//!
//! Columns are tab-separated; short type names get extra tabs so the lexeme column lines up.
//!
//! The same table is printed to the console and written to the dump. Comment tokens are left out; the end-of-input
//! token is listed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use netc_syntax::lexer::Token;

/// Type names shorter than these get an extra tab so lexemes line up.
const TYPE_TAB_STOPS: [usize; 2] = [16, 8];

/// Render the tab-separated `Line / Col / Type / Lexeme` table, one row per non-comment token.
pub fn format_table(tokens: &[Token]) -> String {
    let mut out = String::from("Line\tCol\tType\t\t\tLexeme\n----\t---\t----\t\t\t------\n");
    for token in tokens.iter().filter(|t| !t.is_filterable()) {
        let kind = token.kind.name();
        let mut row = format!("{}\t{}\t{}", token.line, token.column, kind);
        for stop in TYPE_TAB_STOPS {
            if kind.len() < stop {
                row.push('\t');
            }
        }
        row.push_str(&escape_lexeme(&token.lexeme));
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// String literals may span lines; keep each token on one row.
fn escape_lexeme(lexeme: &str) -> String {
    let mut escaped = String::with_capacity(lexeme.len());
    for c in lexeme.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `dir/name.netc` → `dir/name_tokens.txt`.
pub fn dump_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    input.with_file_name(format!("{stem}_tokens.txt"))
}

/// Full dump file contents for `input`.
pub fn dump_contents(input: &Path, tokens: &[Token]) -> String {
    format!("Token Analysis for: {}\n\n{}", input.display(), format_table(tokens))
}

/// Write the dump next to `input` and return where it went.
pub fn write_dump(input: &Path, tokens: &[Token]) -> io::Result<PathBuf> {
    let path = dump_path(input);
    fs::write(&path, dump_contents(input, tokens))?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use netc_syntax::lexer::lex;

    #[test]
    fn test_table_layout() {
        let lexed = lex("feed x;");
        insta::assert_snapshot!(
            format_table(&lexed.tokens),
            @"Line\tCol\tType\t\t\tLexeme\n----\t---\t----\t\t\t------\n1\t1\tFEED\t\tfeed\n1\t6\tIDENTIFIER\tx\n1\t7\tSEMICOLON\t;\n1\t8\tEND_OF_FILE"
        );
    }

    #[test]
    fn test_table_skips_comments_and_escapes_newlines() {
        let lexed = lex("# setup\ntext s = \"a\nb\";");
        let rows: Vec<String> = format_table(&lexed.tokens).lines().skip(2).map(str::to_string).collect();
        assert_eq!(
            rows,
            vec![
                "2\t1\tTEXT\t\ttext",
                "2\t6\tIDENTIFIER\ts",
                "2\t8\tASSIGN\t\t=",
                "2\t10\tSTRING_LITERAL\t\"a\\nb\"",
                "3\t3\tSEMICOLON\t;",
                "3\t4\tEND_OF_FILE",
            ]
        );
    }

    #[test]
    fn test_rows_are_tab_separated() {
        let lexed = lex("dnum n = 42;");
        for row in format_table(&lexed.tokens).lines().skip(2) {
            let fields: Vec<&str> = row.split('\t').filter(|f| !f.is_empty()).collect();
            assert!(fields.len() >= 3, "{row:?}");
            assert!(fields[0].parse::<usize>().is_ok());
            assert!(fields[1].parse::<usize>().is_ok());
        }
    }

    #[test]
    fn test_dump_path_keeps_directory() {
        assert_eq!(
            dump_path(Path::new("samples/server.netc")),
            PathBuf::from("samples/server_tokens.txt")
        );
        assert_eq!(dump_path(Path::new("plain")), PathBuf::from("plain_tokens.txt"));
    }

    #[test]
    fn test_dump_contents_header() {
        let lexed = lex("feed x;");
        let contents = dump_contents(Path::new("a.netc"), &lexed.tokens);
        assert!(contents.starts_with("Token Analysis for: a.netc\n\nLine\tCol\t"));
        assert!(contents.contains("\tIDENTIFIER\tx\n"));
    }
}
