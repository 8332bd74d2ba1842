//! Liar's Poker odds core library.

pub mod bet;
pub mod binomial;
pub mod odds;
pub mod table;
pub mod session;
pub mod words;
pub mod report;
pub mod config;
pub mod error;
pub mod logging;

pub use bet::{BetParameters, DEFAULT_DIGITS_PER_NUMBER, MATCH_PROBABILITY};
pub use binomial::{choose, ln_choose, Binomial, TailPath, WALK_LIMIT};
pub use config::{OddsConfig, TableConfig};
pub use error::{OddsError, Result};
pub use report::Likelihood;
pub use session::LastComputation;
pub use words::{EnglishWords, NumberWords};

pub use odds::{
    compute_probability,
    compute_probability_us_bills,
    compute_probability_with,
    evaluate,
    evaluate_with,
    tail_path,
    ProbabilityResult,
    TailBound,
};

pub use table::{break_even_claim, odds_table, OddsRow, TableSpec};

#[cfg(feature = "parallel")]
pub use table::odds_table_par;
