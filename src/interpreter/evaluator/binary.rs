use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::Value,
    },
};

impl Environment {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Two integers produce an integer, except for a division that leaves a
    /// remainder, which produces a real. If either operand is real, both are
    /// promoted and the result is real. Division by zero is checked for both
    /// categories; integer overflow is reported instead of wrapping.
    ///
    /// # Example
    /// ```
    /// use gscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::Value},
    /// };
    ///
    /// let half = Environment::eval_binary(BinaryOperator::Div, Value::Integer(1), Value::Integer(2), 1);
    /// assert_eq!(half.unwrap(), Value::Real(0.5));
    ///
    /// let two = Environment::eval_binary(BinaryOperator::Div, Value::Integer(4), Value::Integer(2), 1);
    /// assert_eq!(two.unwrap(), Value::Integer(2));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        log::trace!("line {line}: {left} {op} {right}");
        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            return Self::eval_integer_op(op, a, b, line);
        }

        let (left, right) = left.promote_to_real(right, line)?;
        let left = left.as_real(line)?;
        let right = right.as_real(line)?;

        Ok(Value::Real(match op {
                           Add => left + right,
                           Sub => left - right,
                           Mul => left * right,
                           Div => {
                               if right == 0.0 {
                                   return Err(RuntimeError::DivisionByZero { line });
                               }
                               left / right
                           },
                       }))
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                match a.checked_rem(b) {
                    Some(0) => a.checked_div(b),
                    Some(_) => {
                        let quotient = Value::Integer(a).as_real(line)?
                                       / Value::Integer(b).as_real(line)?;
                        return Ok(Value::Real(quotient));
                    },
                    // i64::MIN / -1
                    None => None,
                }
            },
        };

        result.map(Value::Integer).ok_or(RuntimeError::Overflow { line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator::{Add, Div, Mul, Sub};

    fn apply(op: BinaryOperator, left: impl Into<Value>, right: impl Into<Value>) -> EvalResult<Value> {
        Environment::eval_binary(op, left.into(), right.into(), 1)
    }

    #[test]
    fn integer_arithmetic_stays_integral() {
        assert_eq!(apply(Add, 2_i64, 3_i64), Ok(Value::Integer(5)));
        assert_eq!(apply(Sub, 2_i64, 3_i64), Ok(Value::Integer(-1)));
        assert_eq!(apply(Mul, 6_i64, 7_i64), Ok(Value::Integer(42)));
        assert_eq!(apply(Div, 9_i64, 3_i64), Ok(Value::Integer(3)));
    }

    #[test]
    fn fractional_division_becomes_real() {
        assert_eq!(apply(Div, 7_i64, 2_i64), Ok(Value::Real(3.5)));
        assert_eq!(apply(Div, -1_i64, 4_i64), Ok(Value::Real(-0.25)));
    }

    #[test]
    fn mixed_operands_promote() {
        assert_eq!(apply(Add, 1_i64, 0.5), Ok(Value::Real(1.5)));
        assert_eq!(apply(Mul, 0.5, 4_i64), Ok(Value::Real(2.0)));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(apply(Div, 1_i64, 0_i64), Err(RuntimeError::DivisionByZero { line: 1 }));
        assert_eq!(apply(Div, 1.5, 0_i64), Err(RuntimeError::DivisionByZero { line: 1 }));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(apply(Add, i64::MAX, 1_i64), Err(RuntimeError::Overflow { line: 1 }));
        assert_eq!(apply(Mul, i64::MAX, 2_i64), Err(RuntimeError::Overflow { line: 1 }));
        assert_eq!(apply(Div, i64::MIN, -1_i64), Err(RuntimeError::Overflow { line: 1 }));
    }
}
