//! # Error — Failure Taxonomy for the Factoring Pipeline
//!
//! Two kinds of failure flow through the engine and they are handled very
//! differently:
//!
//! - **Contract violations** ([`Error::InvalidBound`], [`Error::InvalidModulus`],
//!   [`Error::InvalidPeriod`], [`Error::NotCoprime`]): the caller passed an
//!   argument the operation is not defined for. Surfaced immediately, never
//!   retried.
//! - **Routine outcomes** ([`Error::RecoveryFailed`], odd periods): expected
//!   events of Shor's classical post-processing. The driver absorbs these by
//!   resampling the trial base.
//!
//! [`Error::NoFactorFound`] sits between the two: the retry budget ran out
//! without producing a nontrivial factor. It is terminal for the run (the
//! modulus may simply be prime) but not for the process — it carries the
//! attempt count so callers can report it.

use thiserror::Error;

/// Errors produced by the sieve, generator, period finder, and driver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Bound too small to contain any prime (bounds ≤ 2 yield an empty
    /// candidate set).
    #[error("bound {bound} too small: no primes strictly below it")]
    InvalidBound { bound: u64 },

    /// Modulus too small for the requested operation (period finding needs
    /// n > 1; the driver needs n ≥ 4 so a base can be drawn from [2, n−1]).
    #[error("modulus {n} too small to operate on")]
    InvalidModulus { n: u64 },

    /// Factor recovery is only defined for positive even periods.
    #[error("period {period} is not a positive even integer")]
    InvalidPeriod { period: u64 },

    /// The trial base shares a factor with the modulus, so no multiplicative
    /// order exists. The shared divisor is included: it is already a
    /// nontrivial factor, so hitting this is a win for the caller.
    #[error("base {base} shares divisor {divisor} with modulus {modulus}")]
    NotCoprime {
        base: u64,
        modulus: u64,
        divisor: u64,
    },

    /// The period was even but x^(r/2) was a trivial square root of 1
    /// (±1 mod n), or both gcd candidates came out trivial. Resample the base.
    #[error("recovery failed for base {base} mod {modulus}: trivial square root")]
    RecoveryFailed { base: u64, modulus: u64 },

    /// The driver exhausted its attempt budget without finding a nontrivial
    /// factor. The modulus may be prime, or the draws were unlucky.
    #[error("no nontrivial factor found after {attempts} attempts")]
    NoFactorFound { attempts: u32 },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
