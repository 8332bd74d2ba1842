//! Human-readable rendering of a [`LastComputation`].

use std::fmt;

use crate::session::LastComputation;

/// Quarter bands of the probability, worst first.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Likelihood {
    /// Below 25%.
    Unlikely = 0,
    /// 25% up to 50%.
    Doubtful = 1,
    /// 50% up to 75%.
    Plausible = 2,
    /// 75% and above.
    Likely = 3,
}

impl Likelihood {
    pub fn of(probability: f64) -> Self {
        if probability < 0.25 {
            Likelihood::Unlikely
        } else if probability < 0.50 {
            Likelihood::Doubtful
        } else if probability < 0.75 {
            Likelihood::Plausible
        } else {
            Likelihood::Likely
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Likelihood::Unlikely => "unlikely",
            Likelihood::Doubtful => "doubtful",
            Likelihood::Plausible => "plausible",
            Likelihood::Likely => "likely",
        };
        f.write_str(s)
    }
}

/// `0.5695 -> "56.95%"`
pub fn percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// "There is a 56.95% chance that other players have at least one sevens"
pub fn sentence(last: &LastComputation) -> String {
    format!(
        "There is a {} chance that other players have at least {} {}s",
        percent(last.probability()),
        last.claim_word(),
        last.rank_word()
    )
}
