//! Expression trees over card values, and the operators that combine them

mod ast;
mod display;
mod eval;
mod operator;

pub use ast::{Card, Expression};
pub use eval::is_close;
pub use operator::Operator;

#[cfg(test)]
mod tests;
