/// Numeric conversion and formatting helpers.
///
/// This module provides the conversions the layout engine needs between
/// counts and coordinates, and the one number format used for labels and
/// printed results.
pub mod num;
