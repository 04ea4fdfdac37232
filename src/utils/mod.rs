//! Deal generation, partitioning and validation helpers

mod deals;
mod errors;
mod partitions;
mod validation;

pub use deals::{Deal, format_deal, generate_all_deals, sorted_cards};
pub use errors::UtilsError;
pub use partitions::{Partitions, partitions, split_deal};
pub use validation::{validate_deal, validate_deal_shape};
