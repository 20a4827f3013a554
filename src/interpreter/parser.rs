/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;
/// Core parsing entry points.
///
/// Holds the [`core::Parser`] grammar value and the top-level expression rule.
pub mod core;
/// Primary expression parsing.
///
/// Parses numeric literals and parenthesized groups.
pub mod primary;
/// Token cursor shared by all parsing functions.
///
/// Tracks the current position, the last consumed token and the depth
/// budget.
pub mod stream;
