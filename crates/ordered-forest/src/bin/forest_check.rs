//! `forest-check` — exercise one tree variant end to end.
//!
//! Usage:
//!   forest-check [strategy] [nums] [gap] [seed]
//!
//! Inserts `1..nums` in the order `gap, 2*gap, ...` (mod `nums`), then checks
//! min/max, membership, a deep copy, and removal of every odd key. Prints
//! nothing past the banner unless something is wrong. `RUST_LOG` controls
//! library logging. Built only with the `bin` feature
//! (`cargo run --features bin --bin forest-check`).

use std::process;

use env_logger::Env;
use log::info;
use ordered_forest::{Forest, ForestConfig, ForestError, StrategyKind};

const DEFAULT_NUMS: u64 = 100_000;
const DEFAULT_GAP: u64 = 37;

struct Args {
    config: ForestConfig,
    nums: u64,
    gap: u64,
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn parse_number(name: &str, raw: Option<&String>, default: u64) -> Result<u64, ForestError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| ForestError::IllegalArgument(format!("{name} must be a non-negative integer, got `{s}`"))),
    }
}

fn parse_args(args: &[String]) -> Result<Args, ForestError> {
    let strategy = match args.get(1) {
        Some(s) => s.parse()?,
        None => StrategyKind::RedBlack,
    };
    let nums = parse_number("nums", args.get(2), DEFAULT_NUMS)?;
    let gap = parse_number("gap", args.get(3), DEFAULT_GAP)?;
    if nums < 2 {
        return Err(ForestError::IllegalArgument("nums must be at least 2".to_string()));
    }
    if gap == 0 || gcd(gap, nums) != 1 {
        return Err(ForestError::IllegalArgument(format!(
            "gap {gap} must be coprime with nums {nums}"
        )));
    }

    let mut config = ForestConfig::new(strategy);
    if let Some(seed) = args.get(4) {
        config = config.with_seed(parse_number("seed", Some(seed), 0)?);
    }
    config.validate()?;
    Ok(Args { config, nums, gap })
}

fn check(forest: &mut Forest<u64>, nums: u64, gap: u64, failures: &mut Vec<String>) {
    if forest.find_min() != Ok(&1) {
        failures.push("FindMin error!".to_string());
    }
    if forest.find_max() != Ok(&(nums - 1)) {
        failures.push("FindMax error!".to_string());
    }
    for i in 1..nums {
        if !forest.contains(&i) {
            failures.push(format!("Find error1! missing {i}"));
            break;
        }
    }
    if forest.contains(&0) {
        failures.push("Oops! found 0".to_string());
    }
    if let Err(e) = forest.assert_valid() {
        failures.push(format!("Invariant error: {e} (gap {gap})"));
    }
}

fn run(args: &Args) -> Result<Vec<String>, ForestError> {
    let Args { config, nums, gap } = args;
    let (nums, gap) = (*nums, *gap);
    let mut failures = Vec::new();
    let mut forest = Forest::with_config(config)?;

    info!("build check: {} keys, gap {gap}", nums - 1);
    let mut i = gap % nums;
    while i != 0 {
        forest.insert(i);
        i = (i + gap) % nums;
    }
    check(&mut forest, nums, gap, &mut failures);

    info!("clone check");
    let mut copy = forest.clone();
    check(&mut copy, nums, gap, &mut failures);

    info!("remove check");
    for i in (1..nums).step_by(2) {
        forest.remove(&i);
    }
    if let Some(i) = (1..nums).step_by(2).find(|i| forest.contains(i)) {
        failures.push(format!("Find error2! still holds {i}"));
    }
    if let Some(i) = (2..nums).step_by(2).find(|i| !forest.contains(i)) {
        failures.push(format!("Find error3! lost {i}"));
    }
    if let Err(e) = forest.assert_valid() {
        failures.push(format!("Invariant error after removal: {e}"));
    }
    if copy.len() as u64 != nums - 1 {
        failures.push("Clone shared state with the original!".to_string());
    }

    Ok(failures)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: forest-check [splay|red-black|treap] [nums] [gap] [seed]");
            process::exit(2);
        }
    };

    println!("Checking {}... (no more output means success)", args.config.strategy);
    match run(&args) {
        Ok(failures) if failures.is_empty() => {}
        Ok(failures) => {
            for failure in failures {
                println!("{failure}");
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
