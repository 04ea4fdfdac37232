use crate::expression::operator::Operator;

/// A numeric card value
pub type Card = f64;

/// Represents an arithmetic expression built from the cards of a deal
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(Card),
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Combine two sub-expressions under `op`
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The operator at the root, `None` for a leaf
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Number(_) => None,
            Expression::Binary { op, .. } => Some(*op),
        }
    }

    /// Leaf values read left to right
    pub fn leaves(&self) -> Vec<Card> {
        let mut out = Vec::with_capacity(self.card_count());
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Binary { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    pub fn card_count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Binary { left, right, .. } => left.card_count() + right.card_count(),
        }
    }
}
