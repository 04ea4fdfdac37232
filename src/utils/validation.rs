use log::{debug, warn};

use crate::expression::Card;
use crate::solver::constants::{MAX_DEAL_SIZE, MAX_EXACT_CARD};
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the deal is empty, longer than [`MAX_DEAL_SIZE`],
/// or contains a NaN or infinite card.
pub fn validate_deal(deal: &[Card]) -> Result<(), UtilsError> {
    debug!("Validating deal: {:?}", deal);

    if deal.is_empty() {
        warn!("Deal is empty");
        return Err(UtilsError::EmptyDeal);
    }

    if deal.len() > MAX_DEAL_SIZE {
        warn!("Deal has {} cards, limit is {}", deal.len(), MAX_DEAL_SIZE);
        return Err(UtilsError::TooManyCards {
            len: deal.len(),
            max: MAX_DEAL_SIZE,
        });
    }

    if let Some(card) = deal.iter().find(|card| !card.is_finite()) {
        warn!("Deal contains a non-finite card: {}", card);
        return Err(UtilsError::NonFiniteCard(*card));
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if `num_cards` is zero or too large, if `min_card > max_card`,
/// or if either bound exceeds [`MAX_EXACT_CARD`] in magnitude.
pub fn validate_deal_shape(
    num_cards: usize,
    min_card: i64,
    max_card: i64,
) -> Result<(), UtilsError> {
    if num_cards == 0 {
        warn!("Requested deals of zero cards");
        return Err(UtilsError::NoCardsPerDeal);
    }

    if num_cards > MAX_DEAL_SIZE {
        warn!("Requested {} cards per deal, limit is {}", num_cards, MAX_DEAL_SIZE);
        return Err(UtilsError::TooManyCards {
            len: num_cards,
            max: MAX_DEAL_SIZE,
        });
    }

    if let Some(card) = [min_card, max_card]
        .into_iter()
        .find(|card| card.unsigned_abs() > MAX_EXACT_CARD.unsigned_abs())
    {
        warn!("Card {} is beyond exact f64 integers", card);
        return Err(UtilsError::InexactCard {
            card,
            limit: MAX_EXACT_CARD,
        });
    }

    if min_card > max_card {
        warn!("Card range is empty: {}..={}", min_card, max_card);
        return Err(UtilsError::InvalidCardRange {
            min: min_card,
            max: max_card,
        });
    }

    Ok(())
}
