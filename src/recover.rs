//! # Recover — Classical Post-Processing of a Found Period
//!
//! The last classical step of Shor's algorithm: given a base x, a modulus n,
//! and the period r of x mod n, extract a nontrivial factor of n.
//!
//! With r even, y = x^(r/2) is a square root of 1 mod n. If y is a
//! *nontrivial* root (y ≢ ±1), then n divides (y−1)(y+1) without dividing
//! either factor, so gcd(y∓1, n) yields a proper divisor. The trivial roots
//! y ≡ ±1 carry no information; that outcome is routine and the caller
//! resamples the base.
//!
//! ## References
//!
//! - P. W. Shor, "Polynomial-Time Algorithms for Prime Factorization and
//!   Discrete Logarithms on a Quantum Computer", SIAM J. Comput.,
//!   26(5):1484–1509, 1997 (§5, classical reduction).

use crate::error::{Error, Result};
use crate::sieve::{gcd, pow_mod};

/// Attempt to extract a nontrivial factor pair of n from a period r of x.
///
/// Returns the pair ordered small-first. Fails with:
/// - [`Error::InvalidModulus`] for n < 2 (contract violation),
/// - [`Error::InvalidPeriod`] for r = 0 or r odd (contract violation),
/// - [`Error::RecoveryFailed`] when x^(r/2) is a trivial square root or
///   both gcd candidates come out trivial (routine; resample x).
pub fn recover_factors(x: u64, n: u64, r: u64) -> Result<(u64, u64)> {
    if n < 2 {
        return Err(Error::InvalidModulus { n });
    }
    if r == 0 || r % 2 != 0 {
        return Err(Error::InvalidPeriod { period: r });
    }
    let y = pow_mod(x, r / 2, n);
    // y ≤ 1 also covers y = 0, which only arises when gcd(x, n) > 1 and
    // never yields a usable root.
    if y <= 1 || y == n - 1 {
        return Err(Error::RecoveryFailed {
            base: x,
            modulus: n,
        });
    }
    for d in [gcd(y - 1, n), gcd(y + 1, n)] {
        if d > 1 && d < n {
            return Ok((d.min(n / d), d.max(n / d)));
        }
    }
    Err(Error::RecoveryFailed {
        base: x,
        modulus: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Concrete Recovery Scenarios ────────────────────────────────────

    /// N = 15, x = 2, r = 4: y = 2² = 4, gcd(3, 15) = 3 and
    /// gcd(5, 15) = 5 — the canonical textbook run recovering (3, 5).
    #[test]
    fn recovers_factors_of_15() {
        assert_eq!(recover_factors(2, 15, 4), Ok((3, 5)));
    }

    /// N = 21, x = 2, r = 6: y = 2³ = 8, gcd(7, 21) = 7 gives the pair
    /// (3, 7).
    #[test]
    fn recovers_factors_of_21() {
        assert_eq!(recover_factors(2, 21, 6), Ok((3, 7)));
    }

    /// N = 9, x = 2, r = 6: y = 2³ = 8 ≡ −1 (mod 9) — a trivial square
    /// root. Recovery fails and the caller must resample.
    #[test]
    fn trivial_root_minus_one_fails() {
        assert_eq!(
            recover_factors(2, 9, 6),
            Err(Error::RecoveryFailed {
                base: 2,
                modulus: 9
            })
        );
    }

    /// y ≡ 1 is the other trivial root: x = 4, n = 15, r = 4 gives
    /// y = 4² = 256 ≡ 1 (mod 15).
    #[test]
    fn trivial_root_one_fails() {
        assert_eq!(
            recover_factors(4, 15, 4),
            Err(Error::RecoveryFailed {
                base: 4,
                modulus: 15
            })
        );
    }

    // ── Preconditions ──────────────────────────────────────────────────

    /// Odd and zero periods are contract violations, rejected before any
    /// arithmetic happens.
    #[test]
    fn odd_or_zero_period_is_rejected() {
        assert_eq!(
            recover_factors(2, 15, 3),
            Err(Error::InvalidPeriod { period: 3 })
        );
        assert_eq!(
            recover_factors(2, 15, 0),
            Err(Error::InvalidPeriod { period: 0 })
        );
    }

    /// Moduli below 2 are rejected before the period is even inspected.
    #[test]
    fn tiny_modulus_is_rejected() {
        assert_eq!(recover_factors(2, 0, 4), Err(Error::InvalidModulus { n: 0 }));
        assert_eq!(recover_factors(2, 1, 4), Err(Error::InvalidModulus { n: 1 }));
    }

    // ── Round Trip Against Known Factorizations ────────────────────────

    /// For every coprime base mod 15 whose order is even and whose half
    /// power is a nontrivial root, recovery must return exactly {3, 5}.
    /// Bases with trivial roots (x = 4 gives y ≡ 1; x = 14 ≡ −1 gives
    /// y ≡ −1) must fail instead — never return 1 or n.
    #[test]
    fn roundtrip_all_bases_mod_15() {
        use crate::order::multiplicative_order;

        let n = 15u64;
        for x in 2..n {
            if gcd(x, n) != 1 {
                continue;
            }
            let r = multiplicative_order(x, n).unwrap();
            if r % 2 != 0 {
                continue;
            }
            match recover_factors(x, n, r) {
                Ok(pair) => assert_eq!(pair, (3, 5), "x={} r={}", x, r),
                Err(Error::RecoveryFailed { .. }) => {
                    let y = pow_mod(x, r / 2, n);
                    assert!(y == 1 || y == n - 1, "x={} r={} y={}", x, r, y);
                }
                Err(e) => panic!("unexpected error for x={}: {}", x, e),
            }
        }
    }
}
