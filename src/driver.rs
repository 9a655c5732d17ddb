//! # Driver — Shor Trial Orchestration
//!
//! Runs repeated randomized factoring attempts against a composite n until
//! one succeeds or the attempt budget runs out. Each attempt walks an
//! explicit state machine:
//!
//! ```text
//! PickBase → CheckGcd → FindPeriod → CheckParity → Recover → Done
//!     ↑                     │            │            │
//!     └────────── Retry ◄───┴────────────┴────────────┘
//! ```
//!
//! - **PickBase** samples x uniformly from [2, n−1] using the injected rng.
//! - **CheckGcd** catches the lucky case first: if gcd(x, n) is already a
//!   proper divisor, the factorization is done without any period finding.
//! - **FindPeriod** calls the injected [`PeriodFinder`] backend — the
//!   brute-force classical loop by default, a quantum oracle in the full
//!   demonstration. The call blocks; no timeout is imposed here.
//! - **CheckParity** retries on odd periods (the recovery identity needs
//!   x^(r/2) to be an integer power).
//! - **Recover** applies the gcd post-processing; trivial square roots
//!   retry, a proper divisor finishes.
//!
//! The retry loop is capped: an attempt budget is injected at construction
//! and exhausting it surfaces [`Error::NoFactorFound`] with the attempt
//! count instead of looping forever on a prime n.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::order::PeriodFinder;
use crate::recover::recover_factors;
use crate::sieve::gcd;

/// A successful factoring run.
///
/// `period` is `None` when the run finished through the gcd shortcut —
/// the sampled base already shared a factor with n and no period was needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Factorization {
    pub n: u64,
    /// Nontrivial factor pair, ordered small-first; the product is n.
    pub factors: (u64, u64),
    /// The trial base the successful attempt used.
    pub base: u64,
    pub period: Option<u64>,
    /// Total attempts consumed, including the successful one.
    pub attempts: u32,
}

/// States of one factoring run. Terminal states are `Done` and the
/// budget-exhaustion exit inside `PickBase`.
enum State {
    PickBase,
    CheckGcd { x: u64 },
    FindPeriod { x: u64 },
    CheckParity { x: u64, r: u64 },
    Recover { x: u64, r: u64 },
    Retry,
    Done(Factorization),
}

/// Orchestrates randomized Shor trials over an injected period-finding
/// backend and rng.
#[derive(Debug)]
pub struct ShorDriver<P, R> {
    backend: P,
    rng: R,
    max_attempts: u32,
}

impl<P: PeriodFinder, R: Rng> ShorDriver<P, R> {
    pub fn new(backend: P, rng: R, max_attempts: u32) -> Self {
        ShorDriver {
            backend,
            rng,
            max_attempts,
        }
    }

    /// Factor a composite n ≥ 4.
    ///
    /// Returns [`Error::InvalidModulus`] for n < 4 (no base can be sampled
    /// from [2, n−1]) and [`Error::NoFactorFound`] once the attempt budget
    /// is exhausted — which is the guaranteed outcome when n is prime.
    /// Backend errors other than the routine retry cases propagate as-is.
    pub fn factor(&mut self, n: u64) -> Result<Factorization> {
        if n < 4 {
            return Err(Error::InvalidModulus { n });
        }
        let mut attempts: u32 = 0;
        let mut state = State::PickBase;
        loop {
            state = match state {
                State::PickBase => {
                    if attempts >= self.max_attempts {
                        info!(n, attempts, "attempt budget exhausted");
                        return Err(Error::NoFactorFound { attempts });
                    }
                    attempts += 1;
                    let x = self.rng.random_range(2..n);
                    debug!(n, x, attempt = attempts, "picked trial base");
                    State::CheckGcd { x }
                }
                State::CheckGcd { x } => {
                    let g = gcd(x, n);
                    if g != 1 && g != n {
                        // Lucky shortcut: the base already shares a factor.
                        debug!(n, x, g, "base shares a divisor, no period needed");
                        State::Done(Factorization {
                            n,
                            factors: (g.min(n / g), g.max(n / g)),
                            base: x,
                            period: None,
                            attempts,
                        })
                    } else {
                        State::FindPeriod { x }
                    }
                }
                State::FindPeriod { x } => {
                    // gcd(x, n) = 1 is guaranteed by CheckGcd, so the
                    // backend contract holds; its errors are not routine.
                    let r = self.backend.find_period(x, n)?;
                    debug!(n, x, r, "period found");
                    State::CheckParity { x, r }
                }
                State::CheckParity { x, r } => {
                    if r % 2 != 0 {
                        debug!(n, x, r, "odd period, resampling base");
                        State::Retry
                    } else {
                        State::Recover { x, r }
                    }
                }
                State::Recover { x, r } => match recover_factors(x, n, r) {
                    Ok(factors) => State::Done(Factorization {
                        n,
                        factors,
                        base: x,
                        period: Some(r),
                        attempts,
                    }),
                    Err(Error::RecoveryFailed { .. }) => {
                        debug!(n, x, r, "trivial square root, resampling base");
                        State::Retry
                    }
                    Err(e) => return Err(e),
                },
                State::Retry => State::PickBase,
                State::Done(outcome) => {
                    info!(
                        n,
                        p = outcome.factors.0,
                        q = outcome.factors.1,
                        attempts = outcome.attempts,
                        "factored"
                    );
                    return Ok(outcome);
                }
            };
        }
    }
}
