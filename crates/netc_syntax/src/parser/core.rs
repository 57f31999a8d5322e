/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] cursor state, its options and outcome types, and the
/// top-level `Program` rule.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
type PResult<T> = Result<T, CompileError>;

/// Default limit for nested blocks, conditions and factors.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Stand-in end-of-input token for cursors that run past a sequence without a sentinel.
static EOF_SENTINEL: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    line: 1,
    column: 1,
    span: Span { start: 0, end: 0 },
};

/// Knobs for a parse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// How deep blocks, conditions and factors may nest before the pass gives up with a
    /// single "nesting too deep" fault.
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Result of a parse run: acceptance plus every syntax fault, in the order found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub accepted: bool,
    pub errors: Vec<CompileError>,
}

/// Parser state.
///
/// ## Notes
/// - `pos` only moves forward and never past the end-of-input token.
/// - `failed` is sticky: any reported fault sets it and nothing clears it. It alone decides
///   acceptance.
/// - Statement-level faults synchronize to the next statement boundary; expression-level
///   faults are recorded where they occur and only abort the innermost construct.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    failed: bool,
    errors: Vec<CompileError>,
    depth: usize,
    max_depth: usize,
    /// Set once the nesting limit is hit; later faults are not recorded.
    abandoned: bool,
}

impl<'a> Parser<'a> {
    /// Create a parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `netc_syntax::lexer`.
    /// - `options`: Limits for this run.
    pub fn with_options(tokens: &'a [Token], options: &ParseOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            failed: false,
            errors: Vec::new(),
            depth: 0,
            max_depth: options.max_nesting_depth,
            abandoned: false,
        }
    }

    /// Run the `Program` rule over the whole token stream.
    pub fn parse(mut self) -> ParseOutcome {
        self.program();
        tracing::debug!(
            accepted = !self.failed,
            errors = self.errors.len(),
            "parse finished"
        );
        ParseOutcome {
            accepted: !self.failed,
            errors: self.errors,
        }
    }

    // Program → StatementList EOF
    fn program(&mut self) {
        self.statement_list();
        if !self.is_at_end() {
            self.error_here("Expected end of file");
        }
    }
}
