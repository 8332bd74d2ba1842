//! Bet parameters (players, claim, digit, holdings, serial length).
//!
//! Plain value types. Nothing here validates ranges: negative or
//! out-of-range numbers are carried through and the engine decides what
//! they mean.

use serde::{Deserialize, Serialize};

/// US bills carry an 8-digit serial number.
pub const DEFAULT_DIGITS_PER_NUMBER: i64 = 8;

/// Number of distinct digit values; every serial digit is uniform over these.
pub const DIGIT_VALUES: i64 = 10;

/// Probability that a single serial digit matches the claimed rank.
pub const MATCH_PROBABILITY: f64 = 1.0 / DIGIT_VALUES as f64;

/// One Liar's Poker bet, seen from the bettor's chair.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BetParameters {
    /// Players at the table, the bettor included.
    pub num_players: i64,
    /// The claim: "there are at least N of this digit on the table".
    pub n_of_a_kind: i64,
    /// The digit being bet on, normally 0..=9.
    pub card_rank: i64,
    /// Copies of the digit in the bettor's own serial number.
    pub amount_owned: i64,
    /// Serial number length.
    pub digits_per_number: i64,
}

impl Default for BetParameters {
    fn default() -> Self {
        Self {
            num_players: 0,
            n_of_a_kind: 0,
            card_rank: 0,
            amount_owned: 0,
            digits_per_number: DEFAULT_DIGITS_PER_NUMBER,
        }
    }
}

impl BetParameters {
    #[inline(always)]
    pub const fn new(
        num_players: i64,
        n_of_a_kind: i64,
        card_rank: i64,
        amount_owned: i64,
        digits_per_number: i64,
    ) -> Self {
        Self {
            num_players,
            n_of_a_kind,
            card_rank,
            amount_owned,
            digits_per_number,
        }
    }

    /// Matches the other players must supply: claim minus own copies.
    #[inline(always)]
    pub const fn claimed_remaining(&self) -> i64 {
        self.n_of_a_kind.saturating_sub(self.amount_owned)
    }

    /// `claimed_remaining - 1`, the bound the tail sum runs to.
    #[inline(always)]
    pub const fn remaining_needed(&self) -> i64 {
        self.claimed_remaining().saturating_sub(1)
    }

    /// Digit slots held by everyone but the bettor.
    #[inline(always)]
    pub const fn digits_in_play(&self) -> i64 {
        self.num_players
            .saturating_sub(1)
            .saturating_mul(self.digits_per_number)
    }
}
