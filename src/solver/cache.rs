//! Memoization shared by the forward and backward searches.
//!
//! Both caches are keyed structurally on the bit patterns of card values, so
//! two deals holding the same multiset of cards share one entry. Entries are
//! never evicted. Search outcomes are written once; seeding from an enumeration
//! replaces a value's witness with the last tree reaching it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::expression::{Card, Expression};
use crate::utils::sorted_cards;

/// Bit pattern of a value with `-0.0` folded into `0.0` and every NaN into one pattern
#[inline]
fn value_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// Canonical key of a deal: its cards sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DealKey(Box<[u64]>);

impl DealKey {
    pub fn new(deal: &[Card]) -> Self {
        Self(sorted_cards(deal).into_iter().map(value_bits).collect())
    }

    pub fn cards(&self) -> Vec<Card> {
        self.0.iter().map(|bits| f64::from_bits(*bits)).collect()
    }
}

/// Exact-value key for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueKey(u64);

impl ValueKey {
    pub fn new(value: f64) -> Self {
        Self(value_bits(value))
    }
}

/// Every tree enumerated for a deal
#[derive(Debug, Default)]
pub struct ForwardCache {
    entries: HashMap<DealKey, Arc<[Expression]>>,
}

impl ForwardCache {
    pub fn get(&self, key: &DealKey) -> Option<Arc<[Expression]>> {
        self.entries.get(key).cloned()
    }

    /// Store `trees` unless the key is already present; returns the stored trees.
    pub fn insert(&mut self, key: DealKey, trees: Vec<Expression>) -> Arc<[Expression]> {
        Arc::clone(self.entries.entry(key).or_insert_with(|| Arc::from(trees)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Witness (or proven impossibility) per deal and target value
#[derive(Debug, Default)]
pub struct BackwardCache {
    entries: HashMap<DealKey, HashMap<ValueKey, Option<Expression>>>,
}

impl BackwardCache {
    /// `None` when not yet computed, `Some(None)` when proven impossible
    pub fn get(&self, key: &DealKey, target: f64) -> Option<Option<Expression>> {
        self.entries
            .get(key)
            .and_then(|targets| targets.get(&ValueKey::new(target)))
            .cloned()
    }

    /// Record the outcome for (key, target) unless one is already stored.
    ///
    /// Returns the stored outcome.
    pub fn record(
        &mut self,
        key: &DealKey,
        target: f64,
        witness: Option<Expression>,
    ) -> Option<Expression> {
        self.entries
            .entry(key.clone())
            .or_default()
            .entry(ValueKey::new(target))
            .or_insert(witness)
            .clone()
    }

    /// Record each tree as a witness for the value it reaches; returns how many values were new.
    ///
    /// Later trees replace earlier ones reaching the same value. Trees with a NaN
    /// or infinite value are skipped, they can never witness a target.
    pub fn seed(&mut self, key: &DealKey, trees: &[Expression]) -> usize {
        let targets = self.entries.entry(key.clone()).or_default();
        let before = targets.len();
        for tree in trees {
            let value = tree.value();
            if !value.is_finite() {
                continue;
            }
            targets.insert(ValueKey::new(value), Some(tree.clone()));
        }
        targets.len() - before
    }

    /// Total number of (deal, target) outcomes stored
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Counters describing how the caches were used
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub forward_hits: u64,
    pub forward_misses: u64,
    pub backward_hits: u64,
    pub backward_misses: u64,
    pub seeded_witnesses: u64,
}

/// Search state owned by a solver: both caches plus usage counters
#[derive(Debug, Default)]
pub struct SearchContext {
    pub(crate) forward: ForwardCache,
    pub(crate) backward: BackwardCache,
    pub(crate) stats: CacheStats,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forward(&self) -> &ForwardCache {
        &self.forward
    }

    pub fn backward(&self) -> &BackwardCache {
        &self.backward
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests_cache {
    use super::{BackwardCache, DealKey, ValueKey};
    use crate::expression::{Expression, Operator};

    #[test]
    fn test_deal_key_ignores_order() {
        assert_eq!(
            DealKey::new(&[3.0, 5.0, 1.0, 2.0]),
            DealKey::new(&[1.0, 2.0, 3.0, 5.0])
        );
        assert_ne!(DealKey::new(&[1.0, 2.0]), DealKey::new(&[1.0, 3.0]));
        assert_eq!(DealKey::new(&[2.0, 1.0]).cards(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_value_key_folds_zero_and_nan() {
        assert_eq!(ValueKey::new(0.0), ValueKey::new(-0.0));
        assert_eq!(ValueKey::new(f64::NAN), ValueKey::new(-f64::NAN));
        assert_ne!(ValueKey::new(24.0), ValueKey::new(24.000_000_000_000_004));
    }

    #[test]
    fn test_first_writer_wins() {
        let mut cache = BackwardCache::default();
        let key = DealKey::new(&[4.0]);
        let stored = cache.record(&key, 4.0, Some(Expression::Number(4.0)));
        assert_eq!(stored, Some(Expression::Number(4.0)));
        let stored = cache.record(&key, 4.0, None);
        assert_eq!(stored, Some(Expression::Number(4.0)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_seed_keeps_last_tree_per_value() {
        let mut cache = BackwardCache::default();
        let key = DealKey::new(&[2.0, 2.0]);
        let trees: Vec<Expression> = Operator::ALL
            .iter()
            .map(|op| Expression::binary(*op, Expression::Number(2.0), Expression::Number(2.0)))
            .collect();
        // 2 + 2 and 2 * 2 both reach 4, the later one is kept
        assert_eq!(cache.seed(&key, &trees), 3);
        assert_eq!(
            cache.get(&key, 4.0),
            Some(Some(Expression::binary(
                Operator::Multiply,
                Expression::Number(2.0),
                Expression::Number(2.0)
            )))
        );
        assert_eq!(cache.get(&key, 5.0), None);
    }

    #[test]
    fn test_seed_skips_non_finite_values() {
        let mut cache = BackwardCache::default();
        let key = DealKey::new(&[0.0, 0.0]);
        let trees = vec![
            Expression::binary(Operator::Divide, Expression::Number(0.0), Expression::Number(0.0)),
            Expression::binary(Operator::Add, Expression::Number(0.0), Expression::Number(0.0)),
        ];
        assert_eq!(cache.seed(&key, &trees), 1);
        assert_eq!(cache.get(&key, f64::NAN), None);
    }
}
