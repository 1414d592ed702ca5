use super::JACKPOT_ODDS;
use statrs::distribution::{Discrete, Poisson};

/// Drawing-level winner odds: will *anyone* hit the jackpot this drawing?
///
/// Exact form: P(no winner among n tickets) = (1 - 1/d)^n with
/// d = 292,201,338, evaluated as exp(n * ln(1 - 1/d)) so precision holds
/// for n in the hundreds of millions.

/// Probability that at least one of `tickets` sold tickets hits the jackpot.
#[inline]
pub fn prob_at_least_one_winner(tickets: f64) -> f64 {
    if !tickets.is_finite() || tickets <= 0.0 {
        return 0.0;
    }
    let q = 1.0 - 1.0 / JACKPOT_ODDS;
    1.0 - (tickets * q.ln()).exp()
}

/// Probability the jackpot rolls over to the next drawing.
#[inline]
pub fn prob_rollover(tickets: f64) -> f64 {
    1.0 - prob_at_least_one_winner(tickets)
}

/// Same figure under the Poisson approximation: 1 - P(X = 0) with
/// X ~ Poisson(n/d). Agrees with the exact form to ~1/d; used to sanity
/// check the split model's lambda against the drawing-level odds.
pub fn prob_at_least_one_winner_poisson(tickets: f64) -> f64 {
    if !tickets.is_finite() || tickets <= 0.0 {
        return 0.0;
    }
    let lambda = tickets / JACKPOT_ODDS;
    match Poisson::new(lambda) {
        Ok(dist) => 1.0 - dist.pmf(0),
        Err(_) => 1.0 - (-lambda).exp(),
    }
}
