/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a count or index to `f64`.
///
/// Counts in a syntax tree are bounded by the parser's depth limit and the
/// input length, far below [`MAX_SAFE_U64_INT`], so the conversion is exact.
///
/// ## Example
/// ```
/// use treecalc::util::num::{MAX_SAFE_U64_INT, usize_to_f64};
///
/// assert_eq!(usize_to_f64(3), 3.0);
/// assert_eq!(usize_to_f64(1 << 20), 1_048_576.0);
/// assert_eq!(MAX_SAFE_U64_INT, (1 << 53) - 1);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    debug_assert!(value as u64 <= MAX_SAFE_U64_INT);
    value as f64
}

/// Formats a number the way leaves and results are displayed.
///
/// Integral values keep a trailing `.0` so that a leaf always reads as a
/// decimal number.
///
/// ## Example
/// ```
/// use treecalc::util::num::format_number;
///
/// assert_eq!(format_number(6.0), "6.0");
/// assert_eq!(format_number(3.25), "3.25");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}
