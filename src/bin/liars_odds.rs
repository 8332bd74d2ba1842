//! Command-line front end.
//!
//! Usage:
//!   liars-odds --players 4 --claim 5 --rank 7 --owned 2
//!   liars-odds --players 4 --claim 5 --rank 7 --owned 2 --digits 8 --bound inclusive
//!   liars-odds --players 6 --owned 1 --table
//!
//! Options:
//!   --players N    players at the table, you included
//!   --claim N      the bet: at least N of the digit on the table
//!   --rank D       digit being bet on (0-9)
//!   --owned N      copies of the digit in your own serial
//!   --digits N     serial length (config / LIARS_ODDS_DIGITS / 8)
//!   --bound B      exclusive | inclusive
//!   --config PATH  TOML config file (else LIARS_ODDS_CONFIG)
//!   --table        list every claim up to table.max_claim

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;

use liars_odds::logging::init_tracing;
use liars_odds::report::{percent, sentence};
use liars_odds::{
    break_even_claim, odds_table, BetParameters, EnglishWords, LastComputation, Likelihood,
    OddsConfig, OddsError, Result, TableSpec, TailBound,
};

#[derive(Debug, Default)]
struct Args {
    players: Option<i64>,
    claim: Option<i64>,
    rank: Option<i64>,
    owned: Option<i64>,
    digits: Option<i64>,
    bound: Option<TailBound>,
    config: Option<PathBuf>,
    table: bool,
}

fn parse_int(flag: &'static str, raw: Option<String>) -> Result<i64> {
    let raw = raw.ok_or(OddsError::MissingArgument(flag))?;
    raw.trim().parse().map_err(|_| OddsError::InvalidValue {
        field: flag.to_string(),
        message: format!("not an integer: `{raw}`"),
    })
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(flag) = it.next() {
        match flag.as_str() {
            "--players" => args.players = Some(parse_int("--players", it.next())?),
            "--claim" => args.claim = Some(parse_int("--claim", it.next())?),
            "--rank" => args.rank = Some(parse_int("--rank", it.next())?),
            "--owned" => args.owned = Some(parse_int("--owned", it.next())?),
            "--digits" => args.digits = Some(parse_int("--digits", it.next())?),
            "--bound" => {
                let raw = it.next().ok_or(OddsError::MissingArgument("--bound"))?;
                args.bound = Some(raw.parse()?);
            }
            "--config" => {
                let raw = it.next().ok_or(OddsError::MissingArgument("--config"))?;
                args.config = Some(PathBuf::from(raw));
            }
            "--table" => args.table = true,
            _ => return Err(OddsError::UnknownArgument(flag)),
        }
    }
    Ok(args)
}

fn print_table(args: &Args, cfg: &OddsConfig, digits: i64, bound: TailBound) -> Result<()> {
    let spec = TableSpec {
        num_players: args.players.ok_or(OddsError::MissingArgument("--players"))?,
        amount_owned: args.owned.unwrap_or(0),
        digits_per_number: digits,
        bound,
    };
    let claims: Vec<i64> = (1..=cfg.table.max_claim).collect();

    println!("{:>6}  {:>8}  {}", "claim", "odds", "band");
    println!("{:-<28}", "");
    for row in odds_table(&spec, &claims) {
        println!(
            "{:>6}  {:>8}  {}",
            row.claim,
            percent(row.probability),
            Likelihood::of(row.probability)
        );
    }

    match break_even_claim(&spec, cfg.table.max_claim, cfg.table.safe_threshold) {
        Some(claim) => println!(
            "\nHighest claim at or above {}: {}",
            percent(cfg.table.safe_threshold),
            claim
        ),
        None => println!("\nNo claim reaches {}", percent(cfg.table.safe_threshold)),
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let cfg = OddsConfig::resolve(args.config.as_deref(), |key| std::env::var(key).ok())?;
    init_tracing(&cfg.log_filter);

    let digits = args.digits.unwrap_or(cfg.digits_per_number);
    let bound = args.bound.unwrap_or(cfg.tail_bound);

    if args.table {
        return print_table(&args, &cfg, digits, bound);
    }

    let bet = BetParameters {
        num_players: args.players.ok_or(OddsError::MissingArgument("--players"))?,
        n_of_a_kind: args.claim.ok_or(OddsError::MissingArgument("--claim"))?,
        card_rank: args.rank.ok_or(OddsError::MissingArgument("--rank"))?,
        amount_owned: args.owned.unwrap_or(0),
        digits_per_number: digits,
    };
    info!(?bet, %bound, "calculating");

    let mut last = LastComputation::new();
    let p = last.calculate(&bet, bound, &EnglishWords).probability;

    println!("{}  ({})", percent(p), Likelihood::of(p));
    println!("{}", sentence(&last));
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
