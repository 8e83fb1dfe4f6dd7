use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ExpressionError, RuntimeError},
    interpreter::{lexer::tokenize, parser::core::parse_expression},
};

/// Every non-digit character an expression may contain.
const EXPRESSION_SYMBOLS: &str = "+-*/()<>=!. \t";

/// A compiled arithmetic or comparison expression over real numbers.
///
/// # Example
/// ```
/// use grd::interpreter::expression::Expression;
///
/// assert_eq!(Expression::compile("10 / 4").unwrap().value(), 2.5);
/// assert_eq!(Expression::compile("(1 + 2) * 3 >= 9").unwrap().value(), 1.0);
/// assert!(Expression::compile("1 +").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    root: Expr,
}

impl Expression {
    /// Compiles expression text.
    ///
    /// # Errors
    /// Returns an [`ExpressionError`] if the text does not lex, does not parse,
    /// or leaves tokens after a complete expression.
    pub fn compile(source: &str) -> Result<Self, ExpressionError> {
        let tokens = tokenize(source)?;
        let mut iter = tokens.iter().peekable();

        let root = parse_expression(&mut iter)?;

        if let Some((tok, _)) = iter.next() {
            return Err(ExpressionError::UnexpectedToken { token: format!("{tok:?}") });
        }

        Ok(Self { root })
    }

    /// Evaluates the expression.
    ///
    /// Comparisons yield `1.0` or `0.0`. Division follows IEEE 754, so
    /// dividing by zero gives an infinity or NaN rather than an error.
    #[must_use]
    pub fn value(&self) -> f64 {
        eval(&self.root)
    }

    /// The parsed tree.
    #[must_use]
    pub const fn root(&self) -> &Expr {
        &self.root
    }
}

/// Returns `true` if `text` only uses the characters an expression may
/// contain: digits, `+ - * / ( ) < > = ! .`, spaces and tabs.
///
/// # Example
/// ```
/// use grd::interpreter::expression::is_expression;
///
/// assert!(is_expression("(3 + 4) / 2 >= 1.5"));
/// assert!(!is_expression("x + 1"));
/// assert!(!is_expression(""));
/// ```
#[must_use]
pub fn is_expression(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || EXPRESSION_SYMBOLS.contains(c))
}

/// Evaluates command-body text to a number.
///
/// Text outside the expression character set evaluates to `0.0` without an
/// error. Text inside it must compile.
///
/// # Errors
/// Returns [`RuntimeError::InvalidExpression`] when the text looks like an
/// expression but does not compile.
pub fn evaluate(text: &str) -> Result<f64, RuntimeError> {
    if !is_expression(text) {
        debug!(expression = text, "not an expression, using 0");
        return Ok(0.0);
    }

    let expression = Expression::compile(text).map_err(|source| {
                         RuntimeError::InvalidExpression { expression: text.to_string(),
                                                           source }
                     })?;
    let result = expression.value();

    debug!(expression = text, result, "expression");
    Ok(result)
}

fn eval(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::UnaryOp { op, expr } => {
            let value = eval(expr);
            match op {
                UnaryOperator::Negate => -value,
                UnaryOperator::Plus => value,
                UnaryOperator::Not => truth(value == 0.0),
            }
        },
        Expr::BinaryOp { left, op, right } => {
            let (left, right) = (eval(left), eval(right));
            match op {
                BinaryOperator::Add => left + right,
                BinaryOperator::Sub => left - right,
                BinaryOperator::Mul => left * right,
                BinaryOperator::Div => left / right,
                BinaryOperator::Less => truth(left < right),
                BinaryOperator::Greater => truth(left > right),
                BinaryOperator::LessEqual => truth(left <= right),
                BinaryOperator::GreaterEqual => truth(left >= right),
                BinaryOperator::Equal => truth(left == right),
                BinaryOperator::NotEqual => truth(left != right),
            }
        },
    }
}

const fn truth(holds: bool) -> f64 {
    if holds { 1.0 } else { 0.0 }
}
