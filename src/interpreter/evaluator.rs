/// Core evaluation logic and environment management.
///
/// Contains the variable environment, the statement interpreter and the
/// outcome type reported back to the driver.
pub mod core;

/// Expression evaluation.
///
/// Reduces a token sequence to a single value by precedence climbing, resolving
/// variables against the environment as it goes.
pub mod expression;

/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*` and `/` to two values with integer/real promotion.
pub mod binary;
