//! Odds tables: one probability per claim for a fixed table.
//!
//! Used to see the whole ladder of bets at once, e.g. "with five players
//! and two sevens in hand, how high can I go?". Each row is independent, so
//! the parallel variant just fans the claims out over rayon.

use serde::{Deserialize, Serialize};

use crate::odds::{compute_probability_with, TailBound};

/// A table seen from the bettor's chair; only the claim varies per row.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableSpec {
    pub num_players: i64,
    pub amount_owned: i64,
    pub digits_per_number: i64,
    pub bound: TailBound,
}

impl TableSpec {
    #[inline]
    pub fn probability(&self, claim: i64) -> f64 {
        compute_probability_with(
            self.num_players,
            claim,
            self.amount_owned,
            self.digits_per_number,
            self.bound,
        )
    }

    #[inline]
    fn row(&self, claim: i64) -> OddsRow {
        OddsRow {
            claim,
            probability: self.probability(claim),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OddsRow {
    pub claim: i64,
    pub probability: f64,
}

/// Sequential: one row per claim, in the order given.
pub fn odds_table(spec: &TableSpec, claims: &[i64]) -> Vec<OddsRow> {
    claims.iter().map(|&c| spec.row(c)).collect()
}

/// Largest claim in `1..=max_claim` whose probability is still at least
/// `threshold`. `None` when even a claim of one falls short.
///
/// Probability never increases with the claim, so the scan stops at the
/// first claim below the threshold.
pub fn break_even_claim(spec: &TableSpec, max_claim: i64, threshold: f64) -> Option<i64> {
    let mut best = None;
    for claim in 1..=max_claim {
        if spec.probability(claim) < threshold {
            break;
        }
        best = Some(claim);
    }
    best
}

#[cfg(feature = "parallel")]
mod par {
    use super::*;
    use rayon::prelude::*;

    /// Parallel: same rows as [`odds_table`], same order.
    ///
    /// Only pays off for long claim lists over big tables; a handful of
    /// rows is faster sequentially.
    pub fn odds_table_par(spec: &TableSpec, claims: &[i64]) -> Vec<OddsRow> {
        claims.par_iter().map(|&c| spec.row(c)).collect()
    }
}

#[cfg(feature = "parallel")]
pub use par::odds_table_par;
