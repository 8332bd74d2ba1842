//! Probability that the other players hold at least the claimed count.
//!
//! Every digit of every other player's serial number is an independent
//! Bernoulli(0.1) trial against the claimed rank. With
//! `k = n_of_a_kind - amount_owned - 1` and `n = (num_players - 1) * digits`:
//!
//! - `k < 0`  -> 1.0 (the bettor already covers the claim)
//! - `k > n`  -> 0.0 (not enough digits on the table)
//! - otherwise `1 - Σ_{i=0..=k} C(n,i) p^i (1-p)^(n-i)`, i.e. P(X > k),
//!   which is P(X >= n_of_a_kind - amount_owned).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bet::{BetParameters, DEFAULT_DIGITS_PER_NUMBER, MATCH_PROBABILITY};
use crate::binomial::{Binomial, TailPath};
use crate::error::OddsError;

/// Which side of `k` the tail sum starts on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailBound {
    /// P(X > k). Sums `i = 0..=k` and subtracts from one.
    #[default]
    Exclusive,
    /// P(X >= k). Sums `i = 0..k` and subtracts from one.
    Inclusive,
}

impl FromStr for TailBound {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" => Ok(TailBound::Exclusive),
            "inclusive" => Ok(TailBound::Inclusive),
            other => Err(OddsError::invalid(
                "tail_bound",
                format!("expected `exclusive` or `inclusive`, got `{other}`"),
            )),
        }
    }
}

impl fmt::Display for TailBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TailBound::Exclusive => f.write_str("exclusive"),
            TailBound::Inclusive => f.write_str("inclusive"),
        }
    }
}

/// Outcome of one evaluated bet.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityResult {
    /// In `[0.0, 1.0]`.
    pub probability: f64,
    /// `n_of_a_kind - amount_owned`.
    pub claimed_remaining: i64,
}

impl Default for ProbabilityResult {
    fn default() -> Self {
        Self {
            probability: 1.0,
            claimed_remaining: 0,
        }
    }
}

/// Probability that the other players hold enough of the digit, using the
/// exclusive tail bound.
pub fn compute_probability(
    num_players: i64,
    n_of_a_kind: i64,
    amount_owned: i64,
    digits_per_number: i64,
) -> f64 {
    compute_probability_with(
        num_players,
        n_of_a_kind,
        amount_owned,
        digits_per_number,
        TailBound::Exclusive,
    )
}

pub fn compute_probability_with(
    num_players: i64,
    n_of_a_kind: i64,
    amount_owned: i64,
    digits_per_number: i64,
    bound: TailBound,
) -> f64 {
    let bet = BetParameters::new(num_players, n_of_a_kind, 0, amount_owned, digits_per_number);
    tail_probability(bet.remaining_needed(), bet.digits_in_play(), bound)
}

/// Evaluate a bet with the exclusive tail bound.
pub fn evaluate(bet: &BetParameters) -> ProbabilityResult {
    evaluate_with(bet, TailBound::Exclusive)
}

pub fn evaluate_with(bet: &BetParameters, bound: TailBound) -> ProbabilityResult {
    ProbabilityResult {
        probability: tail_probability(bet.remaining_needed(), bet.digits_in_play(), bound),
        claimed_remaining: bet.claimed_remaining(),
    }
}

/// Edge policy first, then the binomial tail.
fn tail_probability(remaining_needed: i64, digits_in_play: i64, bound: TailBound) -> f64 {
    if remaining_needed < 0 {
        debug!(remaining_needed, "claim already covered by own serial");
        return 1.0;
    }
    if remaining_needed > digits_in_play {
        debug!(remaining_needed, digits_in_play, "claim exceeds digits in play");
        return 0.0;
    }

    // 0 <= remaining_needed <= digits_in_play from here on.
    let k = remaining_needed as u64;
    let dist = Binomial::new(digits_in_play as u64, MATCH_PROBABILITY);
    let p = match bound {
        TailBound::Exclusive => dist.sf(k),
        TailBound::Inclusive => dist.at_least(k),
    };
    debug!(k, n = dist.trials(), mean = dist.mean(), %bound, p, "binomial tail");
    p
}

/// How [`evaluate`] arrives at its answer for `bet`; `None` when the edge
/// policy decides without touching the distribution.
pub fn tail_path(bet: &BetParameters) -> Option<TailPath> {
    let k = bet.remaining_needed();
    let n = bet.digits_in_play();
    if k < 0 || k > n {
        return None;
    }
    Some(Binomial::new(n as u64, MATCH_PROBABILITY).path(k as u64))
}

/// Same as [`compute_probability`] with the standard 8-digit serial.
#[inline]
pub fn compute_probability_us_bills(num_players: i64, n_of_a_kind: i64, amount_owned: i64) -> f64 {
    compute_probability(num_players, n_of_a_kind, amount_owned, DEFAULT_DIGITS_PER_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_up_single_claim_is_one_minus_q_to_the_eighth() {
        // k = 0, n = 8: 1 - 0.9^8
        let p = compute_probability(2, 1, 0, 8);
        assert!((p - 0.56953279).abs() < 1e-12, "got {p}");
    }

    #[test]
    fn claim_already_covered_is_certain() {
        assert_eq!(compute_probability(5, 2, 2, 8), 1.0);
        assert_eq!(compute_probability(5, 0, 0, 8), 1.0);
        assert_eq!(compute_probability(5, 1, 3, 8), 1.0);
        assert_eq!(compute_probability(0, 0, 0, 0), 1.0);
    }

    #[test]
    fn claim_beyond_table_is_impossible() {
        // Three others hold 24 digits; needing k = 25 cannot happen.
        assert_eq!(compute_probability(4, 26, 0, 8), 0.0);
        assert_eq!(compute_probability(1, 2, 0, 8), 0.0);
    }

    #[test]
    fn every_digit_matching_is_not_quite_zero() {
        // k = n = 8 under the exclusive bound: P(X > 8) over 8 trials.
        assert_eq!(compute_probability(2, 9, 0, 8), 0.0);
        // k = 7: P(X > 7) = P(X = 8) = 1e-8.
        let p = compute_probability(2, 8, 0, 8);
        assert!((p / 1e-8 - 1.0).abs() < 1e-9, "got {p}");
    }

    #[test]
    fn lone_player_boundary() {
        // digits_in_play = 0, k = 0
        assert_eq!(compute_probability_with(1, 1, 0, 8, TailBound::Exclusive), 0.0);
        assert_eq!(compute_probability_with(1, 1, 0, 8, TailBound::Inclusive), 1.0);
        // k > 0
        assert_eq!(compute_probability_with(1, 2, 0, 8, TailBound::Inclusive), 0.0);
    }

    #[test]
    fn no_players_with_positive_claim_is_impossible() {
        assert_eq!(compute_probability(0, 1, 0, 8), 0.0);
        assert_eq!(compute_probability(3, 1, 0, -8), 0.0);
        assert_eq!(compute_probability(3, 1, 0, 0), 0.0);
    }

    #[test]
    fn two_negative_factors_run_the_formula() {
        // (0 - 1) * -8 = 8 digits in play, same as a heads-up game.
        assert_eq!(compute_probability(0, 1, 0, -8), compute_probability(2, 1, 0, 8));
    }

    #[test]
    fn inclusive_bound_shifts_by_one() {
        let exclusive = compute_probability_with(4, 4, 1, 8, TailBound::Exclusive);
        let inclusive = compute_probability_with(4, 5, 1, 8, TailBound::Inclusive);
        assert_eq!(exclusive, inclusive);
    }

    #[test]
    fn huge_tables_stay_finite() {
        // 10_000 digits in play, far past the 170! ceiling.
        let p = compute_probability(1_251, 1_001, 0, 8);
        assert!(p.is_finite());
        assert!((0.0..=1.0).contains(&p));
        assert!(p > 0.4 && p < 0.5, "got {p}");
    }

    #[test]
    fn evaluate_reports_claimed_remaining() {
        let bet = BetParameters::new(6, 7, 3, 2, 8);
        let r = evaluate(&bet);
        assert_eq!(r.claimed_remaining, 5);
        assert_eq!(r.probability, compute_probability(6, 7, 2, 8));
    }

    #[test]
    fn us_bill_shortcut() {
        assert_eq!(compute_probability_us_bills(3, 4, 1), compute_probability(3, 4, 1, 8));
    }

    #[test]
    fn tail_path_reports_edges_and_walks() {
        assert_eq!(tail_path(&BetParameters::new(5, 1, 0, 3, 8)), None);
        assert_eq!(tail_path(&BetParameters::new(2, 20, 0, 0, 8)), None);
        assert_eq!(tail_path(&BetParameters::new(2, 9, 0, 0, 8)), Some(TailPath::Trivial));
        assert_eq!(tail_path(&BetParameters::new(100, 3, 0, 0, 8)), Some(TailPath::LowerWalk));
        assert_eq!(tail_path(&BetParameters::new(100, 200, 0, 0, 8)), Some(TailPath::UpperWalk));
        assert_eq!(
            tail_path(&BetParameters::new(i64::MAX, i64::MAX / 2, 0, 0, 8)),
            Some(TailPath::IncompleteBeta)
        );
    }

    #[test]
    fn tail_bound_parses() {
        assert_eq!("Exclusive".parse::<TailBound>().unwrap(), TailBound::Exclusive);
        assert_eq!(" inclusive ".parse::<TailBound>().unwrap(), TailBound::Inclusive);
        assert!("both".parse::<TailBound>().is_err());
        assert_eq!(TailBound::Inclusive.to_string(), "inclusive");
    }
}
