use log::debug;

use crate::expression::Card;
use crate::utils::errors::UtilsError;
use crate::utils::validation::validate_deal_shape;

/// An ordered sequence of cards
pub type Deal = Vec<Card>;

/// Every non-decreasing deal of `num_cards` integer cards in `min_card..=max_card`,
/// in lexicographic order. Each multiset appears exactly once.
///
/// # Errors
///
/// Returns an error if `num_cards` is zero or too large, or the range is empty.
pub fn generate_all_deals(
    num_cards: usize,
    min_card: i64,
    max_card: i64,
) -> Result<Vec<Deal>, UtilsError> {
    validate_deal_shape(num_cards, min_card, max_card)?;
    debug!(
        "Generating deals of {} cards in {}..={}",
        num_cards, min_card, max_card
    );

    let mut result = Vec::new();

    // Stack entries are partial deals; pushing in descending order keeps output lexicographic.
    let mut stack: Vec<Vec<i64>> = vec![Vec::with_capacity(num_cards)];
    while let Some(partial) = stack.pop() {
        if partial.len() == num_cards {
            result.push(partial.into_iter().map(|card| card as Card).collect());
            continue;
        }

        let lowest = partial.last().copied().unwrap_or(min_card);
        for card in (lowest..=max_card).rev() {
            let mut next = Vec::with_capacity(num_cards);
            next.extend_from_slice(&partial);
            next.push(card);
            stack.push(next);
        }
    }

    debug!("Generated {} deals", result.len());
    Ok(result)
}

/// The deal's cards sorted ascending, the form shared by every ordering of the same multiset
pub fn sorted_cards(deal: &[Card]) -> Deal {
    let mut sorted = deal.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Text form of a deal, e.g. `[1 2 3 4]`
pub fn format_deal(deal: &[Card]) -> String {
    let cards: Vec<String> = deal.iter().map(|card| card.to_string()).collect();
    format!("[{}]", cards.join(" "))
}
