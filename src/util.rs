/// Number formatting helpers.
///
/// This module renders the `f64` results of `set` into the short textual form
/// stored in a node's value cell: at most four significant digits, fixed
/// notation for moderate magnitudes and scientific notation otherwise, with
/// trailing zeros and a dangling decimal point removed.
pub mod format;
