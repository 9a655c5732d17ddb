//! # Sieve — Incremental Prime Generation and Modular Arithmetic
//!
//! Number-theoretic infrastructure for the factoring pipeline. Provides:
//!
//! 1. **Prime generation** via an incremental, segment-free Sieve of
//!    Eratosthenes ([`PrimeSieve`]) — a lazy iterator that yields primes
//!    indefinitely; consumers bound it externally.
//! 2. **Bounded prime lists** ([`primes_below`]), the candidate sets the
//!    semiprime generator samples from.
//! 3. **Greatest common divisor** ([`gcd`]) via Euclid's algorithm, the
//!    workhorse of Shor's classical post-processing.
//! 4. **Modular exponentiation** ([`pow_mod`]) using u128 intermediates.
//!
//! ## Algorithm: Incremental Sieve
//!
//! Instead of materializing a bit array up to a fixed limit, the sieve keeps
//! a map from *next tracked composite* to its *generating prime*. 2 is
//! special-cased; the scan body walks odd candidates only. When an odd
//! candidate q is a key in the map, it is composite: its generating prime p
//! is re-keyed to the next untracked odd multiple of p past q. When q is not
//! a key, it is prime: q is yielded and q² is inserted keyed to q (smaller
//! multiples of q were already crossed off by smaller primes). Each candidate
//! costs one map lookup rather than a test against every known prime, giving
//! near O(n log log n) amortized cost to enumerate primes below n.
//!
//! ## References
//!
//! - Eratosthenes of Cyrene, ~240 BCE (sieve algorithm).
//! - M. E. O'Neill, "The Genuine Sieve of Eratosthenes", Journal of
//!   Functional Programming, 19(1):95–106, 2009 (incremental map-based
//!   formulation).

use std::collections::HashMap;

/// Lazy, monotonically increasing stream of primes starting at 2.
///
/// Each instance starts fresh from 2; the stream is infinite in principle
/// and is bounded by the consumer (`take_while`, [`primes_below`]). The
/// composite-tracking map is owned exclusively by the instance and never
/// exposed.
#[derive(Debug)]
pub struct PrimeSieve {
    /// Next tracked composite → the prime that generates it.
    composites: HashMap<u64, u64>,
    /// Next odd candidate to examine.
    candidate: u64,
    /// Whether 2 has been yielded yet.
    started: bool,
}

impl PrimeSieve {
    pub fn new() -> Self {
        PrimeSieve {
            composites: HashMap::new(),
            candidate: 3,
            started: false,
        }
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        PrimeSieve::new()
    }
}

impl Iterator for PrimeSieve {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        // 2 is the only even prime; the scan below walks odd numbers only.
        if !self.started {
            self.started = true;
            return Some(2);
        }
        loop {
            let q = self.candidate;
            self.candidate += 2;
            match self.composites.remove(&q) {
                Some(p) => {
                    // q is composite. Advance p's entry to its next odd
                    // multiple that isn't already claimed by another prime.
                    // q and p are both odd, so stepping by 2p stays odd.
                    let mut m = q + 2 * p;
                    while self.composites.contains_key(&m) {
                        m += 2 * p;
                    }
                    self.composites.insert(m, p);
                }
                None => {
                    // q is prime. Its first multiple not crossed off by a
                    // smaller prime is q².
                    self.composites.insert(q * q, q);
                    return Some(q);
                }
            }
        }
    }
}

/// All primes strictly below `bound`, in increasing order.
///
/// Empty for `bound` ≤ 2 (there is no prime below 2).
pub fn primes_below(bound: u64) -> Vec<u64> {
    PrimeSieve::new().take_while(|&p| p < bound).collect()
}

/// Greatest common divisor via Euclid's algorithm.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Modular exponentiation: base^exp mod modulus.
/// Uses u128 intermediates to avoid overflow for moduli up to ~2^63.
pub fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result: u64 = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = (result as u128 * base as u128 % modulus as u128) as u64;
        }
        exp >>= 1;
        base = (base as u128 * base as u128 % modulus as u128) as u64;
    }
    result
}
