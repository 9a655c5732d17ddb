//! # shorbreak — Classical Arithmetic Engine for a Shor-Style Factoring Demo
//!
//! The classical half of Shor's integer-factorization algorithm, at
//! demonstration scale:
//!
//! - [`sieve`] — incremental Sieve of Eratosthenes (lazy prime stream,
//!   bounded prime lists) plus gcd and modular exponentiation.
//! - [`semiprime`] — random composite N = p·q built from sieved primes.
//! - [`order`] — brute-force multiplicative-order (period) computation and
//!   the [`PeriodFinder`] seam where a quantum backend plugs in.
//! - [`recover`] — Shor's classical post-processing: nontrivial factors of
//!   N from an even period via gcd.
//! - [`driver`] — the retry state machine orchestrating randomized trials
//!   with an injected rng and a capped attempt budget.
//!
//! The quantum side (circuit construction, QFT period extraction) is out of
//! scope; it is an external collaborator behind [`PeriodFinder`].
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use shorbreak::{BruteForceOrder, ShorDriver};
//!
//! let rng = ChaCha8Rng::seed_from_u64(7);
//! let mut driver = ShorDriver::new(BruteForceOrder, rng, 64);
//! let outcome = driver.factor(15).unwrap();
//! assert_eq!(outcome.factors, (3, 5));
//! ```

pub mod driver;
pub mod error;
pub mod order;
pub mod recover;
pub mod semiprime;
pub mod sieve;

pub use driver::{Factorization, ShorDriver};
pub use error::{Error, Result};
pub use order::{BruteForceOrder, PeriodFinder};
pub use semiprime::Semiprime;
