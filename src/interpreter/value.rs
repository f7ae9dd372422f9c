use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// Every variable holds one of these. Integer arithmetic stays integral until
/// a division leaves a remainder or a real operand is involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// # Errors
    /// `RuntimeError::PrecisionLoss` if an integer is too large to be
    /// represented exactly.
    ///
    /// # Example
    /// ```
    /// use gscript::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(1).unwrap(), 10.0);
    /// assert_eq!(Value::Real(0.5).as_real(1).unwrap(), 0.5);
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::PrecisionLoss { value: *n,
                                                                                    line }),
        }
    }

    /// Promotes both operands to reals if either one is real.
    ///
    /// Two integers are returned unchanged.
    pub fn promote_to_real(self, other: Self, line: usize) -> EvalResult<(Self, Self)> {
        use Value::{Integer, Real};

        match (self, other) {
            (Real(_), Integer(_)) => Ok((self, Real(other.as_real(line)?))),
            (Integer(_), Real(_)) => Ok((Real(self.as_real(line)?), other)),
            _ => Ok((self, other)),
        }
    }
}

/// Canonical text form used by `print`.
///
/// Integers print as plain decimals. Reals use the shortest representation
/// that reads back to the same number and always show a fractional part, so
/// `2.0` stays distinguishable from `2`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_canonical() {
        assert_eq!(Value::Integer(14).to_string(), "14");
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Real(0.5).to_string(), "0.5");
        assert_eq!(Value::Real(2.0).to_string(), "2.0");
        assert_eq!(Value::Real(10.0 / 3.0).to_string(), "3.3333333333333335");
    }

    #[test]
    fn promotion_only_when_mixed() {
        let (a, b) = Value::Integer(1).promote_to_real(Value::Real(0.5), 1).unwrap();
        assert_eq!((a, b), (Value::Real(1.0), Value::Real(0.5)));

        let (a, b) = Value::Integer(1).promote_to_real(Value::Integer(2), 1).unwrap();
        assert_eq!((a, b), (Value::Integer(1), Value::Integer(2)));
    }

    #[test]
    fn huge_integers_do_not_silently_round() {
        let err = Value::Integer(i64::MAX).as_real(7).unwrap_err();
        assert_eq!(err, RuntimeError::PrecisionLoss { value: i64::MAX,
                                                      line:  7, });
    }
}
