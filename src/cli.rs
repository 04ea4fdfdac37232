use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use twentyfour::solver::constants::{
    DEFAULT_MAX_CARD, DEFAULT_MIN_CARD, DEFAULT_NUM_CARDS, DEFAULT_TARGET,
};
use twentyfour::{DealConfig, DealSolver, solve_all};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Find an expression reaching the target for every deal of cards
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(
    about = "Solve every deal of cards in a range, combining them with + - * / to reach a target"
)]
#[command(version)]
pub struct CliArgs {
    /// Number of cards in each deal
    #[arg(short, long, default_value_t = DEFAULT_NUM_CARDS)]
    pub num_cards: usize,

    /// Lowest card value
    #[arg(long, default_value_t = DEFAULT_MIN_CARD, allow_negative_numbers = true)]
    pub min_card: i64,

    /// Highest card value
    #[arg(long, default_value_t = DEFAULT_MAX_CARD, allow_negative_numbers = true)]
    pub max_card: i64,

    /// Value each deal must reach
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: f64,

    /// Print only the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub deals: DealConfig,
    pub quiet: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    config_from_args(args)
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let deals = DealConfig {
        num_cards: args.num_cards,
        min_card: args.min_card,
        max_card: args.max_card,
        target: args.target,
    };

    deals.validate().context("Invalid deal configuration")?;

    Ok(CliConfig {
        deals,
        quiet: args.quiet,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let mut solver = DealSolver::new();
    let report = solve_all(&mut solver, &config.deals).context("Failed to solve deals")?;

    if config.quiet {
        println!("{}", report.summary());
    } else {
        println!("{}", report);
    }

    let context = solver.context();
    let stats = context.stats();
    info!(
        "Cache: {} deals enumerated, {} outcomes stored",
        context.forward().len(),
        context.backward().len()
    );
    info!(
        "Forward hits/misses {}/{}, backward hits/misses {}/{}, {} witnesses seeded",
        stats.forward_hits,
        stats.forward_misses,
        stats.backward_hits,
        stats.backward_misses,
        stats.seeded_witnesses
    );

    Ok(())
}
