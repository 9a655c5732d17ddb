//! # Order — Brute-Force Period Finding
//!
//! Computes the multiplicative order of a base x modulo n: the smallest
//! r ≥ 1 with xʳ ≡ 1 (mod n). This is the "period" Shor's algorithm extracts
//! from the quantum Fourier transform; here it is found by plain iteration
//! through the powers of x.
//!
//! The brute-force loop is O(n) multiplications in the worst case and is
//! deliberately left unoptimized — the whole point of the surrounding system
//! is to replace this loop with a faster (or physical) period-finding
//! mechanism. That seam is the [`PeriodFinder`] trait: the driver talks to
//! the trait, and [`BruteForceOrder`] is the classical reference backend.
//!
//! The order only exists when gcd(x, n) = 1. A brute-force loop without
//! that guard either cycles forever or terminates spuriously, so the gcd is
//! checked up front; a violation reports the shared divisor, which is
//! itself already a nontrivial factor of n.

use crate::error::{Error, Result};
use crate::sieve::gcd;

/// Smallest r ≥ 1 with x^r ≡ 1 (mod n).
///
/// Requires n > 1 ([`Error::InvalidModulus`]) and gcd(x, n) = 1
/// ([`Error::NotCoprime`], carrying the shared divisor). With the gcd guard
/// in place the loop always terminates: the multiplicative group mod n is
/// finite with order below n.
pub fn multiplicative_order(x: u64, n: u64) -> Result<u64> {
    if n < 2 {
        return Err(Error::InvalidModulus { n });
    }
    let x = x % n;
    let g = gcd(x, n);
    if g != 1 {
        return Err(Error::NotCoprime {
            base: x,
            modulus: n,
            divisor: g,
        });
    }
    let mut t = x;
    let mut r: u64 = 1;
    while t != 1 {
        t = (t as u128 * x as u128 % n as u128) as u64;
        r += 1;
    }
    Ok(r)
}

/// The period-finding seam of the pipeline.
///
/// Implementations must return the smallest r with x^r ≡ 1 (mod n) for
/// coprime x and n; behavior for non-coprime inputs is an error. The driver
/// treats `find_period` as a blocking call — wrappers around a real quantum
/// backend should impose their own timeout.
pub trait PeriodFinder {
    fn find_period(&self, x: u64, n: u64) -> Result<u64>;
}

/// Classical reference backend: brute-force iteration through powers of x.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceOrder;

impl PeriodFinder for BruteForceOrder {
    fn find_period(&self, x: u64, n: u64) -> Result<u64> {
        multiplicative_order(x, n)
    }
}
