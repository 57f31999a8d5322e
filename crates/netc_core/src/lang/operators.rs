//! Operator vocabulary.
//!
//! Every combined form (`+=`, `<<`, `&&`, ...) is its own operator, never composed from simpler ones. The scanner
//! picks the longest spelling available at the current position; this table only records what exists.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - Precedence is a grammar concern and lives in the parser, not here.
//!
//! ## Examples
//! ```rust
//! use netc_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("+="), Some(OperatorId::PlusAssign));
//! assert_eq!(operators::name(OperatorId::LeftShift), "LEFT_SHIFT");
//! assert_eq!(operators::category(OperatorId::BitXor), OperatorCategory::Bitwise);
//! ```

/// Stable identifier for every operator.
///
/// ## Notes
/// - The discriminant order matches [`OPERATORS`]; keep them in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,

    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    MultAssign,
    DivAssign,

    // Comparison
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Logical
    And,
    Or,
    Not,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    LeftShift,
    RightShift,

    // Increment / decrement
    Increment,
    Decrement,
}

/// Operator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Assignment,
    Comparison,
    Logical,
    Bitwise,
    Step,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub name: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators, ordered by [`OperatorId`] discriminant.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", "PLUS", OperatorCategory::Arithmetic),
    op(OperatorId::Minus, "-", "MINUS", OperatorCategory::Arithmetic),
    op(OperatorId::Multiply, "*", "MULTIPLY", OperatorCategory::Arithmetic),
    op(OperatorId::Divide, "/", "DIVIDE", OperatorCategory::Arithmetic),
    op(OperatorId::Modulo, "%", "MODULO", OperatorCategory::Arithmetic),
    // Assignment
    op(OperatorId::Assign, "=", "ASSIGN", OperatorCategory::Assignment),
    op(OperatorId::PlusAssign, "+=", "PLUS_ASSIGN", OperatorCategory::Assignment),
    op(OperatorId::MinusAssign, "-=", "MINUS_ASSIGN", OperatorCategory::Assignment),
    op(OperatorId::MultAssign, "*=", "MULT_ASSIGN", OperatorCategory::Assignment),
    op(OperatorId::DivAssign, "/=", "DIV_ASSIGN", OperatorCategory::Assignment),
    // Comparison
    op(OperatorId::Eq, "==", "EQ", OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", "NEQ", OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", "LT", OperatorCategory::Comparison),
    op(OperatorId::Gt, ">", "GT", OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", "LTE", OperatorCategory::Comparison),
    op(OperatorId::GtEq, ">=", "GTE", OperatorCategory::Comparison),
    // Logical
    op(OperatorId::And, "&&", "AND", OperatorCategory::Logical),
    op(OperatorId::Or, "||", "OR", OperatorCategory::Logical),
    op(OperatorId::Not, "!", "NOT", OperatorCategory::Logical),
    // Bitwise
    op(OperatorId::BitAnd, "&", "BITWISE_AND", OperatorCategory::Bitwise),
    op(OperatorId::BitOr, "|", "BITWISE_OR", OperatorCategory::Bitwise),
    op(OperatorId::BitXor, "^", "BITWISE_XOR", OperatorCategory::Bitwise),
    op(OperatorId::BitNot, "~", "BITWISE_NOT", OperatorCategory::Bitwise),
    op(OperatorId::LeftShift, "<<", "LEFT_SHIFT", OperatorCategory::Bitwise),
    op(OperatorId::RightShift, ">>", "RIGHT_SHIFT", OperatorCategory::Bitwise),
    // Increment / decrement
    op(OperatorId::Increment, "++", "INCREMENT", OperatorCategory::Step),
    op(OperatorId::Decrement, "--", "DECREMENT", OperatorCategory::Step),
];

/// Look up the metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Source spelling (e.g. `"<<"`).
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Display name used in token tables (e.g. `"LEFT_SHIFT"`).
pub fn name(id: OperatorId) -> &'static str {
    info_for(id).name
}

/// Operator family.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, name: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        name,
        category,
    }
}
