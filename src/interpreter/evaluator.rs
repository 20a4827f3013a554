/// Arithmetic on evaluated operands.
///
/// Applies one binary operator to two numbers, checking the divisor of a
/// division before dividing.
pub mod binary;
/// Core evaluation logic.
///
/// Walks canonical trees and syntax trees in post-order and defines the
/// evaluator's result type.
pub mod core;
