//! Syntax recognizer for the NetC programming language
//!
//! A recursive-descent pass with one method per grammar rule. It validates the token sequence and reports every
//! fault it meets; it builds no tree. The outcome is `accepted` plus the diagnostics list.
//!
//! ## Grammar (top to bottom precedence)
//!
//! ```text
//! Program       → StatementList EOF
//! Statement     → LinkStmt | Declaration | IfStmt | UntilStmt | IterateStmt | NetworkStmt
//!                 | InitStmt | FeedStmt | ForwardStmt | ReturnStmt | Assignment | ';' | comment
//! Condition     → '!' Condition | '(' Condition ')' | Expr [ (RelOp | LogicalOp) Expr ]
//! Expr          → Term (AddOp Term)*        AddOp = + - | & ^
//! Term          → Factor (MulOp Factor)*    MulOp = * / % << >>
//! Factor        → UnaryOp Factor | Literal | Identifier ['(' [ArgumentList] ')'] | '(' Expr ')'
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use netc_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("if (a < b < c) { }");
//! let outcome = parser::parse(&lexed.tokens);
//! assert!(!outcome.accepted);
//! assert_eq!(outcome.errors[0].message, "Expected ')' after condition");
//! ```

use crate::diagnostics::{CompileError, errors};
use crate::lexer::{Span, Token, TokenKind};
use netc_core::lang::keywords::KeywordId;
use netc_core::lang::operators::OperatorId;
use netc_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
