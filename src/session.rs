//! The last computed bet, kept for display.
//!
//! The front end keeps showing this snapshot while new inputs are being
//! typed; only an explicit [`LastComputation::calculate`] replaces it.

use tracing::debug;

use crate::bet::BetParameters;
use crate::odds::{evaluate_with, ProbabilityResult, TailBound};
use crate::words::NumberWords;

#[derive(Clone, Debug, PartialEq)]
pub struct LastComputation {
    result: ProbabilityResult,
    claim_word: String,
    rank_word: String,
}

impl Default for LastComputation {
    fn default() -> Self {
        Self {
            result: ProbabilityResult::default(),
            claim_word: "zero".to_string(),
            rank_word: "zero".to_string(),
        }
    }
}

impl LastComputation {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn result(&self) -> &ProbabilityResult {
        &self.result
    }

    #[inline]
    pub fn probability(&self) -> f64 {
        self.result.probability
    }

    /// Spelled-out `n_of_a_kind - amount_owned`.
    #[inline]
    pub fn claim_word(&self) -> &str {
        &self.claim_word
    }

    /// Spelled-out card rank.
    #[inline]
    pub fn rank_word(&self) -> &str {
        &self.rank_word
    }

    /// Evaluate `bet` and make it the current snapshot.
    ///
    /// Edge results (0.0 / 1.0) refresh the words too, so the sentence always
    /// describes the bet that produced the probability shown next to it.
    /// Words the speller can't produce keep their previous value; the two
    /// are replaced together or not at all.
    pub fn calculate<W: NumberWords + ?Sized>(
        &mut self,
        bet: &BetParameters,
        bound: TailBound,
        words: &W,
    ) -> &ProbabilityResult {
        self.result = evaluate_with(bet, bound);
        match (words.spell(self.result.claimed_remaining), words.spell(bet.card_rank)) {
            (Some(claim), Some(rank)) => {
                self.claim_word = claim;
                self.rank_word = rank;
            }
            _ => debug!(?bet, "number words unavailable, keeping previous"),
        }
        &self.result
    }
}
