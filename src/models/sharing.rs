/// Jackpot split model: expected payout to a winning ticket when other
/// tickets may hold the same numbers.
///
/// Each of the n other tickets matches the jackpot independently with
/// probability 1/292,201,338; for large n and tiny p the count of other
/// winners X is Poisson(lambda) with lambda = n / 292,201,338. Given that
/// our ticket wins, the cash pool splits evenly among 1 + X holders:
///
/// E[share] = sum_{x=0}^{XMAX} P(X = x) * cash / (1 + x)
///
/// Probabilities come from the recurrence P(0) = e^-lambda,
/// P(x) = P(x-1) * lambda / x -- no factorials, numerically stable for the
/// realistic lambda range (0..50) since terms shrink monotonically past the
/// mode. The sum is truncated at XMAX = 200 co-winners: a deliberate
/// approximation, not a convergence loop. The neglected tail mass is far
/// below f64 noise for any plausible ticket volume, and the cutoff gives
/// the computation a constant-time bound.
///
/// All inputs/outputs are f64. Pure function, no allocations.

/// Truncation bound for the Poisson summation.
pub const MAX_OTHER_WINNERS: u32 = 200;

/// Expected payout to our ticket, conditional on it matching the jackpot.
///
/// `lambda` is the expected count of *other* jackpot-matching tickets.
/// With lambda = 0 there is nobody to split with and the full cash value
/// comes back exactly.
#[inline]
pub fn expected_share_given_win(cash_value: f64, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return cash_value;
    }

    let mut p = (-lambda).exp(); // P(X = 0)
    let mut sum = p * cash_value;
    for x in 1..=MAX_OTHER_WINNERS {
        p *= lambda / x as f64;
        sum += p * (cash_value / (1.0 + x as f64));
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{Discrete, Poisson};

    #[test]
    fn test_zero_lambda_returns_full_cash() {
        assert_eq!(expected_share_given_win(500_000_000.0, 0.0), 500_000_000.0);
        assert_eq!(expected_share_given_win(1.0, 0.0), 1.0);
    }

    #[test]
    fn test_share_matches_closed_form() {
        // E[1/(1+X)] for X ~ Poisson(lambda) has the closed form
        // (1 - e^-lambda) / lambda; the truncated sum must agree.
        for &lambda in &[0.1, 0.5, 1.0, 2.444, 5.0, 20.0, 50.0] {
            let cash = 400_000_000.0;
            let share = expected_share_given_win(cash, lambda);
            let exact = cash * (1.0 - (-lambda).exp()) / lambda;
            let rel = (share - exact).abs() / exact;
            assert!(rel < 1e-9, "lambda={lambda}: share={share} exact={exact}");
        }
    }

    #[test]
    fn test_share_monotone_nonincreasing_in_lambda() {
        let cash = 250_000_000.0;
        let lambdas = [0.0, 0.01, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0];
        let mut prev = f64::INFINITY;
        for &lambda in &lambdas {
            let share = expected_share_given_win(cash, lambda);
            assert!(
                share <= prev,
                "share must not increase with lambda: {share} > {prev} at lambda={lambda}"
            );
            prev = share;
        }
    }

    #[test]
    fn test_share_bounded_by_cash() {
        for &lambda in &[0.0, 0.5, 3.0, 40.0] {
            let share = expected_share_given_win(100_000_000.0, lambda);
            assert!(share > 0.0 && share <= 100_000_000.0, "share={share}");
        }
    }

    #[test]
    fn test_recurrence_agrees_with_statrs_pmf() {
        // Rebuild the truncated sum from statrs Poisson mass directly.
        let cash = 300_000_000.0;
        let lambda = 2.444;
        let dist = Poisson::new(lambda).expect("valid lambda");
        let reference: f64 = (0..=MAX_OTHER_WINNERS as u64)
            .map(|x| dist.pmf(x) * cash / (1.0 + x as f64))
            .sum();
        let share = expected_share_given_win(cash, lambda);
        assert!(
            (share - reference).abs() / reference < 1e-10,
            "recurrence {share} vs statrs {reference}"
        );
    }
}
