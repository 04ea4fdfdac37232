//! Solving every deal of a card range and formatting the results

use std::fmt;

use log::{debug, info};

use crate::expression::Expression;
use crate::solver::DealSolver;
use crate::solver::constants::{
    DEFAULT_MAX_CARD, DEFAULT_MIN_CARD, DEFAULT_NUM_CARDS, DEFAULT_TARGET,
};
use crate::utils::{Deal, UtilsError, format_deal, generate_all_deals, validate_deal_shape};

/// Which deals to generate and the value each must reach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealConfig {
    pub num_cards: usize,
    pub min_card: i64,
    pub max_card: i64,
    pub target: f64,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            num_cards: DEFAULT_NUM_CARDS,
            min_card: DEFAULT_MIN_CARD,
            max_card: DEFAULT_MAX_CARD,
            target: DEFAULT_TARGET,
        }
    }
}

impl DealConfig {
    /// # Errors
    ///
    /// Returns an error if the deal shape is invalid, see [`validate_deal_shape`].
    pub fn validate(&self) -> Result<(), UtilsError> {
        validate_deal_shape(self.num_cards, self.min_card, self.max_card)
    }
}

/// The result for one deal
#[derive(Debug, Clone, PartialEq)]
pub struct DealOutcome {
    pub index: usize,
    pub deal: Deal,
    pub witness: Option<Expression>,
}

impl DealOutcome {
    pub fn is_possible(&self) -> bool {
        self.witness.is_some()
    }
}

impl fmt::Display for DealOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.witness {
            Some(expr) => write!(f, "{}. {}: {}", self.index, format_deal(&self.deal), expr),
            None => write!(f, "{}. {}: not possible", self.index, format_deal(&self.deal)),
        }
    }
}

/// Outcomes for every deal, in generation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub outcomes: Vec<DealOutcome>,
}

impl Report {
    pub fn possible(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_possible()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// e.g. `566 / 715 possible`
    pub fn summary(&self) -> String {
        format!("{} / {} possible", self.possible(), self.total())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(f, "{}", self.summary())
    }
}

/// Generate every deal described by `config` and find a witness for each
///
/// # Errors
///
/// Returns an error if `config` describes no valid deals.
pub fn solve_all(solver: &mut DealSolver, config: &DealConfig) -> Result<Report, UtilsError> {
    config.validate()?;
    let deals = generate_all_deals(config.num_cards, config.min_card, config.max_card)?;
    info!("Solving {} deals for target {}", deals.len(), config.target);

    let outcomes: Vec<DealOutcome> = deals
        .into_iter()
        .enumerate()
        .map(|(index, deal)| {
            let witness = solver.find_witness(&deal, config.target);
            let outcome = DealOutcome {
                index,
                deal,
                witness,
            };
            debug!("{}", outcome);
            outcome
        })
        .collect();

    let report = Report { outcomes };
    info!("{}", report.summary());
    Ok(report)
}
