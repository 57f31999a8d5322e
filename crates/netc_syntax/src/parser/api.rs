/// Check a token stream against the NetC grammar with default options.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `netc_syntax::lexer`.
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    parse_with_options(tokens, &ParseOptions::default())
}

/// Check a token stream against the NetC grammar.
///
/// The stream should end in an `Eof` token; a stream without one (including an empty slice) is
/// treated as if it had one.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_options(tokens: &[Token], options: &ParseOptions) -> ParseOutcome {
    Parser::with_options(tokens, options).parse()
}
