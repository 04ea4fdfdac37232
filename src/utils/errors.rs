use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Deal cannot be empty")]
    EmptyDeal,
    #[error("Deal has {len} cards, at most {max} are supported")]
    TooManyCards { len: usize, max: usize },
    #[error("Card values must be finite: {0}")]
    NonFiniteCard(f64),
    #[error("A deal needs at least one card")]
    NoCardsPerDeal,
    #[error("Invalid card range: min={min}, max={max}")]
    InvalidCardRange { min: i64, max: i64 },
    #[error("Card {card} cannot be represented exactly, magnitude must not exceed {limit}")]
    InexactCard { card: i64, limit: i64 },
}
