//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! The grammar groups tokens into families (data types, additive operators, ...). These predicates are the one
//! place those families are defined, so the parser's dispatch, its recovery, and the display layers all agree.

use crate::lexer::{Token, TokenKind};
use netc_core::lang::keywords::{self, KeywordId};
use netc_core::lang::operators::OperatorId;
use netc_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for tokens that listings and dump files leave out (comments).
    pub fn is_filterable(&self) -> bool {
        matches!(self, TokenKind::Comment)
    }

    /// `text`, `dnum`, `cnum`, `flag`.
    pub fn is_data_type(&self) -> bool {
        self.keyword_id().is_some_and(keywords::is_data_type)
    }

    /// Return `true` if a statement can begin with this token.
    ///
    /// This is the statement dispatch set; error recovery stops in front of any of these.
    pub fn can_start_statement(&self) -> bool {
        match self {
            TokenKind::Keyword(id) => match id {
                KeywordId::Link
                | KeywordId::Text
                | KeywordId::Dnum
                | KeywordId::Cnum
                | KeywordId::Flag
                | KeywordId::If
                | KeywordId::Until
                | KeywordId::Iterate
                | KeywordId::Network
                | KeywordId::Init
                | KeywordId::Feed
                | KeywordId::Forward
                | KeywordId::Yield => true,
                KeywordId::Else | KeywordId::True | KeywordId::False => false,
            },
            TokenKind::Ident | TokenKind::Comment => true,
            TokenKind::Punctuation(p) => *p == PunctuationId::Semicolon,
            TokenKind::Operator(_)
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::BoolLiteral
            | TokenKind::Eof
            | TokenKind::Unknown => false,
        }
    }

    /// Operators at the `Expr` tier: `+ - | & ^`.
    pub fn is_add_op(&self) -> bool {
        matches!(
            self.operator_id(),
            Some(OperatorId::Plus | OperatorId::Minus | OperatorId::BitOr | OperatorId::BitAnd | OperatorId::BitXor)
        )
    }

    /// Operators at the `Term` tier: `* / % << >>`.
    pub fn is_mul_op(&self) -> bool {
        matches!(
            self.operator_id(),
            Some(
                OperatorId::Multiply
                    | OperatorId::Divide
                    | OperatorId::Modulo
                    | OperatorId::LeftShift
                    | OperatorId::RightShift
            )
        )
    }

    /// `== != < > <= >=`.
    pub fn is_rel_op(&self) -> bool {
        matches!(
            self.operator_id(),
            Some(
                OperatorId::Eq | OperatorId::NotEq | OperatorId::Lt | OperatorId::Gt | OperatorId::LtEq | OperatorId::GtEq
            )
        )
    }

    /// `&& ||`.
    pub fn is_logical_op(&self) -> bool {
        matches!(self.operator_id(), Some(OperatorId::And | OperatorId::Or))
    }

    /// Prefix operators accepted by `Factor`: `- ! ~ ++ --`.
    pub fn is_unary_op(&self) -> bool {
        matches!(
            self.operator_id(),
            Some(
                OperatorId::Minus
                    | OperatorId::Not
                    | OperatorId::BitNot
                    | OperatorId::Increment
                    | OperatorId::Decrement
            )
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral | TokenKind::BoolLiteral
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.is_filterable()`.
    pub fn is_filterable(&self) -> bool {
        self.kind.is_filterable()
    }
}
