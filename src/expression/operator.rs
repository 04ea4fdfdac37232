use std::fmt;

/// The four binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in the order the searches try them
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    #[inline]
    pub fn compute(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }

    /// The value the right operand must have so that `compute(left, right) == target`
    #[inline]
    pub fn inverse(self, left: f64, target: f64) -> f64 {
        match self {
            Operator::Add => target - left,
            Operator::Subtract => left - target,
            Operator::Multiply => target / left,
            Operator::Divide => left / target,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests_operator {
    use super::Operator;

    #[test]
    fn test_inverse_undoes_compute() {
        let left = 6.0;
        let target = 24.0;
        for op in Operator::ALL {
            let needed = op.inverse(left, target);
            let value = op.compute(left, needed);
            assert!(
                (value - target).abs() < 1e-9,
                "{} gave {} instead of {}",
                op,
                value,
                target
            );
        }
    }

    #[test]
    fn test_inverse_values() {
        assert_eq!(Operator::Add.inverse(3.0, 24.0), 21.0);
        assert_eq!(Operator::Subtract.inverse(30.0, 24.0), 6.0);
        assert_eq!(Operator::Multiply.inverse(3.0, 24.0), 8.0);
        assert_eq!(Operator::Divide.inverse(48.0, 24.0), 2.0);
    }

    #[test]
    fn test_divide_needs_zero_only_for_zero_left() {
        assert_eq!(Operator::Divide.inverse(0.0, 24.0), 0.0);
        assert!(Operator::Divide.inverse(5.0, 0.0).is_infinite());
    }

    #[test]
    fn test_declaration_order_and_symbols() {
        let symbols: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["+", "-", "*", "/"]);
    }
}
