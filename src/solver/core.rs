use std::sync::Arc;

use log::{debug, trace};

use crate::expression::{Card, Expression, Operator, is_close};
use crate::solver::cache::{DealKey, SearchContext};
use crate::solver::constants::EPSILON;
use crate::solver::errors::SolverError;
use crate::utils::{partitions, validate_deal};

/// Configuration for the search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// A value is accepted when it lies strictly within `epsilon` of the target
    pub epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

/// Finds expressions over a deal's cards that reach a target value.
///
/// Results are memoized in the solver's [`SearchContext`] for its whole
/// lifetime, so repeated or overlapping queries get cheaper as it warms up.
#[derive(Debug, Default)]
pub struct DealSolver {
    config: SolverConfig,
    context: SearchContext,
}

impl DealSolver {
    /// Create a solver with the default tolerance and empty caches
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self::with_context(config, SearchContext::new())
    }

    /// Create a solver that continues from previously filled caches
    pub fn with_context(config: SolverConfig, context: SearchContext) -> Self {
        Self { config, context }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    pub fn into_context(self) -> SearchContext {
        self.context
    }

    /// Validate `deal`, then [`find_witness`](Self::find_witness).
    ///
    /// # Errors
    ///
    /// Returns an error if the deal is empty, has more than
    /// [`MAX_DEAL_SIZE`](crate::solver::constants::MAX_DEAL_SIZE) cards, or holds a
    /// non-finite card.
    pub fn solve(&mut self, deal: &[Card], target: f64) -> Result<Option<Expression>, SolverError> {
        validate_deal(deal)?;
        Ok(self.find_witness(deal, target))
    }

    /// Find an expression using every card of `deal` exactly once whose value
    /// is within tolerance of `target`, or `None` if there is none.
    ///
    /// The deal is not validated: a deal too large to partition (64 cards or
    /// more) is reported as impossible. Use [`solve`](Self::solve) for untrusted input.
    pub fn find_witness(&mut self, deal: &[Card], target: f64) -> Option<Expression> {
        let key = DealKey::new(deal);
        self.search_needed(deal, &key, target)
    }

    /// Every tree over `deal`: one per partition, left tree, right tree and operator.
    ///
    /// Each tree's value is also recorded as a witness in the backward cache.
    pub fn enumerate_trees(&mut self, deal: &[Card]) -> Arc<[Expression]> {
        let key = DealKey::new(deal);
        if let Some(trees) = self.context.forward.get(&key) {
            self.context.stats.forward_hits += 1;
            return trees;
        }

        if let [card] = deal {
            return Arc::from(vec![Expression::Number(*card)]);
        }

        self.context.stats.forward_misses += 1;

        let mut trees = Vec::new();
        for (left_cards, right_cards) in partitions(deal) {
            let left_trees = self.enumerate_trees(&left_cards);
            let right_trees = self.enumerate_trees(&right_cards);
            for left in left_trees.iter() {
                for right in right_trees.iter() {
                    for op in Operator::ALL {
                        trees.push(Expression::binary(op, left.clone(), right.clone()));
                    }
                }
            }
        }

        let seeded = self.context.backward.seed(&key, &trees);
        self.context.stats.seeded_witnesses += seeded as u64;
        debug!(
            "Enumerated {} trees ({} new values) for {:?}",
            trees.len(),
            seeded,
            key.cards()
        );

        self.context.forward.insert(key, trees)
    }

    fn search_needed(&mut self, deal: &[Card], key: &DealKey, target: f64) -> Option<Expression> {
        // Nothing is within tolerance of NaN or infinity
        if !target.is_finite() {
            return None;
        }

        if let Some(cached) = self.context.backward.get(key, target) {
            self.context.stats.backward_hits += 1;
            return cached;
        }

        // Leaves are not cached: the check is cheaper than the entry
        if let [card] = deal {
            return is_close(*card, target, self.config.epsilon)
                .then_some(Expression::Number(*card));
        }

        self.context.stats.backward_misses += 1;
        trace!("Searching {:?} for {}", deal, target);

        for (left_cards, right_cards) in partitions(deal) {
            let left_trees = self.enumerate_trees(&left_cards);
            let right_key = DealKey::new(&right_cards);
            for left in left_trees.iter() {
                let left_value = left.value();
                for op in Operator::ALL {
                    let needed = op.inverse(left_value, target);
                    if op == Operator::Divide && needed == 0.0 {
                        continue;
                    }
                    if let Some(right) = self.search_needed(&right_cards, &right_key, needed) {
                        let witness = Expression::binary(op, left.clone(), right);
                        trace!("{:?} reaches {} with {}", deal, target, witness);
                        return self.context.backward.record(key, target, Some(witness));
                    }
                }
            }
        }

        trace!("{:?} cannot reach {}", deal, target);
        self.context.backward.record(key, target, None)
    }
}
