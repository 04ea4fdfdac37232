use log::trace;

use crate::expression::ast::Expression;

/// Whether `value` lies strictly within `epsilon` of `target`.
///
/// NaN and infinite values are never close to anything.
#[inline]
pub fn is_close(value: f64, target: f64, epsilon: f64) -> bool {
    (value - target).abs() < epsilon
}

impl Expression {
    /// Evaluate the expression.
    ///
    /// Division by a zero-valued subtree is not rejected: the infinity or NaN
    /// it yields flows through to the caller, where it fails any tolerance check.
    pub fn value(&self) -> f64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Binary { op, left, right } => {
                let result = op.compute(left.value(), right.value());
                if !result.is_finite() {
                    trace!("Non-finite value {} from {}", result, self);
                }
                result
            }
        }
    }
}
