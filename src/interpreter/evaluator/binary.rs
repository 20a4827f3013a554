use crate::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Evaluates a binary arithmetic operation.
///
/// Division by zero is checked explicitly, before dividing, so no infinite or
/// NaN quotient is ever produced by it. Both `0.0` and `-0.0` count as zero.
/// A result that overflows `f64` is an error as well.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use treecalc::{
///     ast::BinaryOperator, error::EvalError, interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Mul, 1.5, 2.0), Ok(3.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 5.0, 0.0), Err(EvalError::DivisionByZero));
/// assert_eq!(eval_binary(BinaryOperator::Mul, f64::MAX, 2.0), Err(EvalError::NotFinite));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    let value = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        },
    };
    finite(value)
}

/// Passes `value` through if it is finite.
///
/// # Errors
/// Returns [`EvalError::NotFinite`] for infinities and NaN.
pub const fn finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() { Ok(value) } else { Err(EvalError::NotFinite) }
}
