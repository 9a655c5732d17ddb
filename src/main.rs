//! # Main — CLI Entry Point
//!
//! Routes subcommands to the engine: `factor` runs the Shor trial driver on
//! a given composite, `generate` draws a random semiprime from sieved
//! primes, `primes` lists the bounded prime list itself.
//!
//! ## Global Options
//!
//! - `--seed`: fixed rng seed for reproducible runs (default: OS entropy).
//! - `--json`: machine-readable output via serde_json.
//! - `RUST_LOG`: tracing filter for state-machine transition logs
//!   (e.g. `RUST_LOG=shorbreak=debug`), written to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use shorbreak::{semiprime, sieve, BruteForceOrder, ShorDriver};

#[derive(Parser)]
#[command(name = "shorbreak", about = "Classical Shor-style factoring demonstration")]
struct Cli {
    /// RNG seed for deterministic runs (defaults to OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Factor a composite via randomized Shor trials (brute-force period backend)
    Factor {
        /// The number to factor (demonstration scale: period finding is O(n))
        n: u64,

        /// Attempt budget before giving up
        #[arg(long, default_value_t = 64)]
        max_attempts: u32,
    },
    /// Generate a random semiprime p·q from primes below a bound
    Generate {
        /// Exclusive upper bound on the sampled primes (must exceed 2)
        #[arg(long, default_value_t = 100)]
        bound: u64,
    },
    /// List all primes strictly below a bound
    Primes {
        bound: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    match cli.command {
        Command::Factor { n, max_attempts } => {
            let mut driver = ShorDriver::new(BruteForceOrder, rng, max_attempts);
            let outcome = driver.factor(n)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{} = {} * {}", outcome.n, outcome.factors.0, outcome.factors.1);
                match outcome.period {
                    Some(r) => println!(
                        "base {} has period {}; recovered in {} attempt(s)",
                        outcome.base, r, outcome.attempts
                    ),
                    None => println!(
                        "base {} shared a divisor with {}; recovered in {} attempt(s)",
                        outcome.base, outcome.n, outcome.attempts
                    ),
                }
            }
        }
        Command::Generate { bound } => {
            let s = semiprime::random_semiprime(bound, &mut rng)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&s)?);
            } else {
                println!("{} = {} * {}", s.n, s.p, s.q);
            }
        }
        Command::Primes { bound } => {
            let primes = sieve::primes_below(bound);
            if cli.json {
                println!("{}", serde_json::to_string(&primes)?);
            } else {
                let line: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
                println!("{}", line.join(" "));
            }
        }
    }
    Ok(())
}
