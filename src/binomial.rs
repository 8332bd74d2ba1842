//! Binomial coefficients and tail sums.
//!
//! Terms are built in log space with the ratio recurrence
//! `t(i+1) = t(i) * (n-i)/(i+1) * p/q`, seeded from `statrs`' log-gamma
//! `ln_binomial`, so there is no overflow ceiling on `n`. Tails are summed
//! from whichever side is small, which keeps `1 - (almost 1)` cancellation
//! out of tiny probabilities.
//!
//! Walks longer than [`WALK_LIMIT`] terms go to the regularized incomplete
//! beta in `statrs` instead, which costs the same for any `k`.

use statrs::distribution::{Binomial as BinomialDist, DiscreteCDF};
use statrs::function::factorial::ln_binomial;

/// Longest term-by-term walk before switching to the incomplete beta.
pub const WALK_LIMIT: u64 = 1 << 20;

/// `C(n, r)` by multiplicative recurrence.
///
/// Exact for small arguments; returns `f64::INFINITY` only when the
/// coefficient itself exceeds the f64 range (e.g. `C(2000, 1000)`).
pub fn choose(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    let r = r.min(n - r);
    let mut acc = 1.0f64;
    for i in 1..=r {
        acc = acc * (n - r + i) as f64 / i as f64;
    }
    acc
}

/// `ln C(n, r)`. Negative infinity when `r > n`.
#[inline]
pub fn ln_choose(n: u64, r: u64) -> f64 {
    if r > n {
        return f64::NEG_INFINITY;
    }
    ln_binomial(n, r)
}

/// How a tail probability gets computed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TailPath {
    /// Nothing to sum: `k >= n`.
    Trivial,
    /// Terms `0..=k`, below the mode.
    LowerWalk,
    /// Terms `k+1..`, at or past the mode, until they vanish.
    UpperWalk,
    /// Regularized incomplete beta, for walks past [`WALK_LIMIT`].
    IncompleteBeta,
}

/// Binomial(n, p) with `0 < p < 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
    ln_p: f64,
    ln_q: f64,
}

impl Binomial {
    pub fn new(n: u64, p: f64) -> Self {
        debug_assert!(p > 0.0 && p < 1.0, "p must be in (0, 1), got {p}");
        Self {
            n,
            p,
            ln_p: p.ln(),
            ln_q: (-p).ln_1p(),
        }
    }

    #[inline(always)]
    pub fn trials(&self) -> u64 {
        self.n
    }

    #[inline(always)]
    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    /// Most likely success count, `floor((n+1)p)`.
    #[inline]
    pub fn mode(&self) -> u64 {
        let m = (self.n.saturating_add(1) as f64 * self.p).floor() as u64;
        m.min(self.n)
    }

    /// Which way `cdf(k)` / `sf(k)` will be evaluated.
    pub fn path(&self, k: u64) -> TailPath {
        if k >= self.n {
            TailPath::Trivial
        } else if k >= WALK_LIMIT {
            TailPath::IncompleteBeta
        } else if k < self.mode() {
            TailPath::LowerWalk
        } else {
            TailPath::UpperWalk
        }
    }

    #[inline]
    fn ln_pmf(&self, i: u64) -> f64 {
        ln_choose(self.n, i) + i as f64 * self.ln_p + (self.n - i) as f64 * self.ln_q
    }

    /// P(X = i).
    pub fn pmf(&self, i: u64) -> f64 {
        if i > self.n {
            return 0.0;
        }
        self.ln_pmf(i).exp()
    }

    /// Σ P(X = i) for i = 0..=k, walking terms upward from i = 0.
    fn lower_sum(&self, k: u64) -> f64 {
        let ln_odds = self.ln_p - self.ln_q;
        let mut ln_t = self.n as f64 * self.ln_q;
        let mut sum = 0.0f64;
        for i in 0..=k {
            sum += ln_t.exp();
            if i < k {
                ln_t += ((self.n - i) as f64).ln() - ((i + 1) as f64).ln() + ln_odds;
            }
        }
        sum
    }

    /// Σ P(X = i) for i = k+1..=n. Only called with `k >= mode`, where the
    /// terms shrink monotonically, so the walk stops once they no longer
    /// move the sum.
    fn upper_sum(&self, k: u64) -> f64 {
        let ln_odds = self.ln_p - self.ln_q;
        let mut i = k + 1;
        let mut ln_t = self.ln_pmf(i);
        let mut sum = 0.0f64;
        loop {
            let t = ln_t.exp();
            sum += t;
            if i == self.n || t <= sum * f64::EPSILON * 0.5 {
                break;
            }
            ln_t += ((self.n - i) as f64).ln() - ((i + 1) as f64).ln() + ln_odds;
            i += 1;
        }
        sum
    }

    /// P(X > k) through `I_p(k+1, n-k)`.
    fn beta_sf(&self, k: u64) -> f64 {
        let v = match BinomialDist::new(self.p, self.n) {
            Ok(d) => d.sf(k),
            Err(_) => f64::NAN,
        };
        if v.is_nan() {
            // Only reachable for degenerate p; fall back on which side of
            // the mean k sits.
            return if (k as f64) < self.mean() { 1.0 } else { 0.0 };
        }
        v
    }

    /// P(X <= k).
    pub fn cdf(&self, k: u64) -> f64 {
        let v = match self.path(k) {
            TailPath::Trivial => return 1.0,
            TailPath::LowerWalk => self.lower_sum(k),
            TailPath::UpperWalk => 1.0 - self.upper_sum(k),
            TailPath::IncompleteBeta => 1.0 - self.beta_sf(k),
        };
        v.clamp(0.0, 1.0)
    }

    /// P(X > k), the survival function.
    pub fn sf(&self, k: u64) -> f64 {
        let v = match self.path(k) {
            TailPath::Trivial => return 0.0,
            TailPath::LowerWalk => 1.0 - self.lower_sum(k),
            TailPath::UpperWalk => self.upper_sum(k),
            TailPath::IncompleteBeta => self.beta_sf(k),
        };
        v.clamp(0.0, 1.0)
    }

    /// P(X >= k).
    pub fn at_least(&self, k: u64) -> f64 {
        if k == 0 {
            1.0
        } else {
            self.sf(k - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn choose_small_values_are_exact() {
        assert_eq!(choose(0, 0), 1.0);
        assert_eq!(choose(8, 0), 1.0);
        assert_eq!(choose(8, 8), 1.0);
        assert_eq!(choose(8, 3), 56.0);
        assert_eq!(choose(52, 5), 2_598_960.0);
        assert_eq!(choose(3, 4), 0.0);
    }

    #[test]
    fn choose_past_factorial_ceiling_stays_finite() {
        // 171! overflows f64, C(200, 3) does not.
        assert_eq!(choose(200, 3), 1_313_400.0);
        assert!(choose(400, 10).is_finite());
    }

    #[test]
    fn ln_choose_matches_choose() {
        for &(n, r) in &[(10u64, 4u64), (24, 6), (100, 50), (7, 0)] {
            assert!(close(ln_choose(n, r), choose(n, r).ln(), 1e-9), "n={n} r={r}");
        }
        assert_eq!(ln_choose(2, 3), f64::NEG_INFINITY);
    }

    #[test]
    fn pmf_sums_to_one() {
        let b = Binomial::new(24, 0.1);
        let total: f64 = (0..=24).map(|i| b.pmf(i)).sum();
        assert!(close(total, 1.0, 1e-12));
        assert_eq!(b.pmf(25), 0.0);
    }

    #[test]
    fn zero_successes_is_q_to_the_n() {
        let b = Binomial::new(8, 0.1);
        assert!(close(b.pmf(0), 0.9f64.powi(8), 1e-14));
        assert!(close(b.sf(0), 1.0 - 0.9f64.powi(8), 1e-13));
    }

    #[test]
    fn cdf_and_sf_are_complements() {
        let b = Binomial::new(40, 0.1);
        for k in 0..40 {
            assert!(close(b.cdf(k) + b.sf(k), 1.0, 1e-12), "k={k}");
        }
        assert_eq!(b.cdf(40), 1.0);
        assert_eq!(b.sf(40), 0.0);
    }

    #[test]
    fn mode_is_floor_of_n_plus_one_times_p() {
        assert_eq!(Binomial::new(8, 0.1).mode(), 0);
        assert_eq!(Binomial::new(9, 0.1).mode(), 1);
        assert_eq!(Binomial::new(100, 0.1).mode(), 10);
        assert_eq!(Binomial::new(0, 0.1).mode(), 0);
    }

    #[test]
    fn tiny_upper_tail_keeps_precision() {
        // P(X > 39) over 40 trials is p^40 = 1e-40; 1 - cdf would round to 0.
        let b = Binomial::new(40, 0.1);
        let v = b.sf(39);
        assert!(close(v / 1e-40, 1.0, 1e-9), "got {v}");
    }

    #[test]
    fn large_n_is_finite() {
        let b = Binomial::new(10_000, 0.1);
        let v = b.sf(1_000);
        assert!(v.is_finite());
        // Just past the mean, a bit under one half.
        assert!(v > 0.4 && v < 0.5, "got {v}");
        assert!(b.sf(2_000) < 1e-100);
    }

    #[test]
    fn path_follows_mode_and_limit() {
        let b = Binomial::new(100, 0.1);
        assert_eq!(b.path(3), TailPath::LowerWalk);
        assert_eq!(b.path(10), TailPath::UpperWalk);
        assert_eq!(b.path(100), TailPath::Trivial);
        let huge = Binomial::new(u64::MAX / 2, 0.1);
        assert_eq!(huge.path(WALK_LIMIT), TailPath::IncompleteBeta);
    }

    #[test]
    fn incomplete_beta_path_agrees_with_walk_at_the_limit() {
        // Just under the limit the terms are walked; at the limit, statrs.
        let b = Binomial::new(10 * WALK_LIMIT, 0.1);
        assert_eq!(b.path(WALK_LIMIT - 1), TailPath::LowerWalk);
        let walked = b.sf(WALK_LIMIT - 1);
        let beta = b.sf(WALK_LIMIT);
        assert!(beta <= walked);
        assert!(walked - beta < 1e-3, "walked={walked} beta={beta}");
    }

    #[test]
    fn huge_claims_do_not_walk() {
        let b = Binomial::new(i64::MAX as u64, 0.1);
        let v = b.sf(i64::MAX as u64 / 2);
        assert!((0.0..=1.0).contains(&v), "got {v}");
        assert!(v < 1e-6);
    }

    #[test]
    fn at_least_zero_is_certain() {
        assert_eq!(Binomial::new(0, 0.1).at_least(0), 1.0);
        assert_eq!(Binomial::new(5, 0.1).at_least(0), 1.0);
        assert_eq!(Binomial::new(0, 0.1).at_least(1), 0.0);
    }
}
