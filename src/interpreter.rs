/// The evaluator module reduces canonical trees to numbers.
///
/// The evaluator walks a tree bottom-up, evaluating children before applying
/// their parent's operator. Division by a zero divisor is reported as an
/// error before any arithmetic is attempted with it.
///
/// # Responsibilities
/// - Evaluates canonical trees and, equivalently, syntax trees.
/// - Reports division by zero as a typed error.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads raw text and produces a lazy stream of tokens (numbers,
/// operators, parentheses) with their byte spans, skipping spaces. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source spans.
/// - Reports the first unrecognized character with its offset.
pub mod lexer;
/// The normalizer module derives canonical trees from syntax trees.
///
/// Parentheses vanish, numbers become leaves and every binary operation
/// becomes a labelled branch with its operands in order.
pub mod normalizer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that encodes precedence and associativity in its shape.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with offsets.
/// - Bounds the depth of the tree it builds.
pub mod parser;
