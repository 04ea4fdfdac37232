use log::warn;

use crate::expression::Card;

/// Lazily splits a deal into every (left, right) pair of non-empty,
/// order-preserving sub-sequences.
///
/// Each mask in `1..2^len - 1` is visited once, in ascending order. A clear
/// bit `b` sends card `b` left, a set bit sends it right, so both orientations
/// of a split are produced (by complementary masks).
#[derive(Debug, Clone)]
pub struct Partitions<'a> {
    deal: &'a [Card],
    mask: u64,
    end: u64,
}

impl<'a> Partitions<'a> {
    pub fn new(deal: &'a [Card]) -> Self {
        let end = match u32::try_from(deal.len()).ok().and_then(|len| 1u64.checked_shl(len)) {
            Some(all) => all - 1,
            None => {
                warn!("Deal of {} cards is too large to partition", deal.len());
                0
            }
        };
        Self { deal, mask: 1, end }
    }

    /// Total number of partitions this iterator yields
    pub fn count_total(&self) -> u64 {
        self.end.saturating_sub(1)
    }
}

impl Iterator for Partitions<'_> {
    type Item = (Vec<Card>, Vec<Card>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask >= self.end {
            return None;
        }
        let split = split_deal(self.deal, self.mask);
        self.mask += 1;
        Some(split)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end.saturating_sub(self.mask)).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Split `deal` by the bits of `mask`: clear bits go left, set bits go right.
pub fn split_deal(deal: &[Card], mask: u64) -> (Vec<Card>, Vec<Card>) {
    let mut left = Vec::with_capacity(deal.len());
    let mut right = Vec::with_capacity(deal.len());
    for (bit, &card) in deal.iter().enumerate() {
        if (mask >> bit) & 1 == 0 {
            left.push(card);
        } else {
            right.push(card);
        }
    }
    (left, right)
}

/// Every partition of `deal`, see [`Partitions`]
pub fn partitions(deal: &[Card]) -> Partitions<'_> {
    Partitions::new(deal)
}
