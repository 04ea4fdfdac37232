use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}

impl Expression {
    /// Fully parenthesized text of the expression, e.g. `((3 + 5) * 2)`
    pub fn render(&self) -> String {
        self.to_string()
    }
}
