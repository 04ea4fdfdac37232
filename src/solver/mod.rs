mod cache;
pub mod constants;
mod core;
mod errors;

pub use cache::{BackwardCache, CacheStats, DealKey, ForwardCache, SearchContext, ValueKey};
pub use self::core::{DealSolver, SolverConfig};
pub use errors::SolverError;
