//! Twentyfour - find arithmetic expressions that combine a deal of cards into a target
//!
//! Every card is used exactly once with the binary operators `+ - * /` in any
//! tree shape. The search works backwards from the target: for each split of the
//! deal it enumerates the left side's trees and asks what value the right side
//! would need to reach, memoizing both directions across queries.

pub mod expression;
pub mod report;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Card, Expression, Operator};
pub use report::{DealConfig, DealOutcome, Report, solve_all};
pub use solver::{DealSolver, SearchContext, SolverConfig, SolverError};
pub use utils::{Deal, UtilsError, generate_all_deals, validate_deal};

/// Find an expression over `deal` that evaluates to `target`
///
/// This is a convenience function that validates the deal and solves it with
/// a fresh default solver. Use [`DealSolver`] directly to keep the caches
/// warm across many queries.
///
/// # Returns
///
/// * `Ok(Some(Expression))` - If a matching expression is found
/// * `Ok(None)` - If no expression over these cards reaches the target
/// * `Err(SolverError)` - If the deal is empty, too large, or holds a non-finite card
///
/// # Errors
///
/// This function will return an error if the deal fails [`validate_deal`].
///
/// # Examples
///
/// ```
/// use twentyfour::find_witness;
///
/// match find_witness(&[8.0, 8.0, 3.0, 3.0], 24.0) {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("not possible"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_witness(deal: &[Card], target: f64) -> Result<Option<Expression>, SolverError> {
    DealSolver::new().solve(deal, target)
}
