/// An abstract syntax tree (AST) node representing an arithmetic or comparison
/// expression.
///
/// Expressions appear as the bodies of `set` and `if` operations. They are
/// built by the expression parser and reduced to a single `f64` by
/// [`Expression::value`](crate::interpreter::expression::Expression::value).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3`, `2.5` or `.5`.
    Number(f64),
    /// A prefix operation (e.g. `-x` or `!x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// An infix operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. Comparisons evaluate
/// to `1.0` when they hold and `0.0` otherwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==` or `=`)
    Equal,
    /// Not equal to (`!=` or `<>`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for the comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Unary plus, the identity (e.g. `+x`).
    Plus,
    /// Logical NOT (e.g. `!x`): `1` when the operand is zero, `0` otherwise.
    Not,
}
