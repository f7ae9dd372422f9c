/// Numeric conversion helpers.
///
/// Converting between `i64` and `f64` can silently lose precision. The helpers
/// here return a `Result` instead, which is `Ok` only if the conversion is
/// exact.
pub mod num;
