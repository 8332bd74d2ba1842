//! Benchmark odds calculations across table sizes.
//!
//! Usage:
//!   cargo run --release --example odds_bench
//!   cargo run --release --example odds_bench --features parallel
//!
//! Each single-bet row also shows how the tail was computed (edge policy,
//! lower/upper walk, or incomplete beta), since cost depends on that more
//! than on table size.

use std::time::{Duration, Instant};
use liars_odds::{
    evaluate,
    odds_table,
    tail_path,
    BetParameters,
    TableSpec,
    TailBound,
    TailPath,
};

const UNITS: [(f64, &str); 3] = [(1e9, "s"), (1e6, "ms"), (1e3, "μs")];

fn human(per_iter: Duration) -> String {
    let ns = per_iter.as_nanos() as f64;
    UNITS
        .iter()
        .find(|(scale, _)| ns >= *scale)
        .map(|(scale, unit)| format!("{:.2} {}", ns / scale, unit))
        .unwrap_or_else(|| format!("{:.0} ns", ns))
}

fn path_label(bet: &BetParameters) -> &'static str {
    match tail_path(bet) {
        None => "edge",
        Some(TailPath::Trivial) => "trivial",
        Some(TailPath::LowerWalk) => "lower walk",
        Some(TailPath::UpperWalk) => "upper walk",
        Some(TailPath::IncompleteBeta) => "inc. beta",
    }
}

/// Time `f` over `iterations` calls and return the per-call duration.
fn time_per_call<F: FnMut() -> f64>(iterations: u32, mut f: F) -> Duration {
    let mut sink = 0.0f64;
    for _ in 0..10 {
        sink += f();
    }
    let start = Instant::now();
    for _ in 0..iterations {
        sink += f();
    }
    let per_call = start.elapsed() / iterations;
    std::hint::black_box(sink);
    per_call
}

fn bench_bet(name: &str, iterations: u32, bet: BetParameters) {
    let per_call = time_per_call(iterations, || evaluate(&bet).probability);
    let p = evaluate(&bet).probability;
    println!(
        "{:38} {:>12}  {:>11}  p={:.6}",
        name,
        human(per_call),
        path_label(&bet),
        p
    );
}

fn main() {
    println!("=== Liar's Poker Odds Benchmarks ===\n");
    println!("{:38} {:>12}  {:>11}", "Scenario", "Time/Call", "Path");
    println!("{:-<78}", "");

    println!("\n--- Single bets (8-digit serials) ---");

    bench_bet("Heads-up, claim 1", 1_000_000, BetParameters::new(2, 1, 7, 0, 8));
    bench_bet("5 players, claim 5, own 2", 1_000_000, BetParameters::new(5, 5, 7, 2, 8));
    bench_bet("10 players, claim 9, own 1", 1_000_000, BetParameters::new(10, 9, 7, 1, 8));
    bench_bet("Already covered", 1_000_000, BetParameters::new(6, 2, 7, 3, 8));
    bench_bet("Impossible", 1_000_000, BetParameters::new(2, 20, 7, 0, 8));

    println!("\n--- Large tables ---");

    bench_bet("1k players, claim at mean", 1_000, BetParameters::new(1_000, 800, 7, 0, 8));
    bench_bet("1k players, far tail", 1_000, BetParameters::new(1_000, 2_000, 7, 0, 8));
    bench_bet("100k players, claim at mean", 10, BetParameters::new(100_000, 80_000, 7, 0, 8));
    bench_bet("Saturated table, claim 4.6e18", 10, BetParameters::new(i64::MAX, i64::MAX / 2, 7, 0, 8));

    println!("\n--- Odds tables (claims 1..=200, 100 players) ---");

    let spec = TableSpec {
        num_players: 100,
        amount_owned: 1,
        digits_per_number: 8,
        bound: TailBound::Exclusive,
    };
    let claims: Vec<i64> = (1..=200).collect();

    let seq = time_per_call(100, || {
        odds_table(&spec, &claims).iter().map(|r| r.probability).sum()
    });
    println!("{:38} {:>12}", "Sequential table", human(seq));

    #[cfg(feature = "parallel")]
    {
        let par = time_per_call(100, || {
            liars_odds::odds_table_par(&spec, &claims).iter().map(|r| r.probability).sum()
        });
        println!("{:38} {:>12}", "Parallel table", human(par));
    }
}
