use super::tickets::infer_tickets_sold;
use super::{EvError, EvReport, EvRequest};
use crate::models::sharing::expected_share_given_win;
use crate::models::tiers::lower_tier_ev_per_ticket;
use crate::models::JACKPOT_ODDS;

/// Per-ticket expected value of a single Powerball ticket.
///
/// total = jackpot component + lower-tier component
///
/// where:
///   jackpot = (1/292,201,338) * E[share | win] * (1 - tax)
///   lower   = sum over fixed tiers of P(tier) * prize, never taxed
///
/// Withholding applies to the jackpot component only; reporting the lower
/// tiers untaxed is a business rule to preserve, not an omission.
///
/// This is a **pure function**: no I/O, no shared state, deterministic,
/// safe to call concurrently. Failures come back as values.

#[inline]
fn clamp01(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

pub fn compute_ev(request: &EvRequest) -> Result<EvReport, EvError> {
    let cash_value = request.cash_value;

    // Zero is allowed: it isolates the fixed lower tiers.
    if !cash_value.is_finite() || cash_value < 0.0 {
        return Err(EvError::InvalidCashValue);
    }

    let combined_tax_rate =
        clamp01(clamp01(request.federal_tax_rate) + clamp01(request.state_tax_rate));

    let (tickets_estimate, tickets_source) = infer_tickets_sold(
        cash_value,
        request.prev_cash_value,
        request.tickets_sold,
        request.contribution_per_ticket,
    )?;

    let lambda_others = if tickets_estimate.is_finite() && tickets_estimate > 0.0 {
        tickets_estimate / JACKPOT_ODDS
    } else {
        0.0
    };

    let (expected_share_if_win, jackpot_ev_per_ticket) = if cash_value > 0.0 {
        let share = expected_share_given_win(cash_value, lambda_others);
        let ev = share / JACKPOT_ODDS * (1.0 - combined_tax_rate);
        (share, ev)
    } else {
        (0.0, 0.0)
    };

    let lower_ev_per_ticket = lower_tier_ev_per_ticket();

    Ok(EvReport {
        cash_value,
        tickets_estimate,
        tickets_source,
        lambda_others,
        combined_tax_rate,
        expected_share_if_win,
        jackpot_ev_per_ticket,
        lower_ev_per_ticket,
        total_ev_per_ticket: jackpot_ev_per_ticket + lower_ev_per_ticket,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TicketsSource;

    #[test]
    fn test_invalid_cash_value_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            let req = EvRequest::new(bad);
            assert_eq!(compute_ev(&req).unwrap_err(), EvError::InvalidCashValue);
        }
    }

    #[test]
    fn test_zero_jackpot_isolates_lower_tiers() {
        let report = compute_ev(&EvRequest::new(0.0)).expect("zero cash is valid");
        assert_eq!(report.jackpot_ev_per_ticket, 0.0);
        assert_eq!(report.expected_share_if_win, 0.0);
        assert_eq!(report.total_ev_per_ticket, report.lower_ev_per_ticket);
        assert!((report.lower_ev_per_ticket - 0.32).abs() < 0.01);
    }

    #[test]
    fn test_half_billion_pool_fallback_scenario() {
        // cash=500M, no prev, no manual tickets, contribution 0.70, no tax:
        // tickets ~ 714,285,714; lambda ~ 2.444; jackpot EV a small positive
        // fraction of a dollar.
        let report = compute_ev(&EvRequest::new(500_000_000.0)).expect("valid");
        assert_eq!(report.tickets_source, TicketsSource::PoolFallback);
        assert!(
            (report.tickets_estimate - 714_285_714.0).abs() < 1.0,
            "tickets={}",
            report.tickets_estimate
        );
        assert!(
            (report.lambda_others - 2.444).abs() < 1e-2,
            "lambda={}",
            report.lambda_others
        );
        assert!(
            report.jackpot_ev_per_ticket > 0.3 && report.jackpot_ev_per_ticket < 1.0,
            "jackpot EV={}",
            report.jackpot_ev_per_ticket
        );
        assert!((report.lower_ev_per_ticket - 0.32).abs() < 0.01);
    }

    #[test]
    fn test_delta_inference_scenario() {
        let report = compute_ev(&EvRequest {
            prev_cash_value: Some(300_000_000.0),
            ..EvRequest::new(400_000_000.0)
        })
        .expect("valid");
        assert_eq!(report.tickets_source, TicketsSource::CashDelta);
        assert!(
            (report.tickets_estimate - 142_857_143.0).abs() < 1.0,
            "tickets={}",
            report.tickets_estimate
        );
    }

    #[test]
    fn test_previous_above_current_fails_fast() {
        let err = compute_ev(&EvRequest {
            prev_cash_value: Some(200.0),
            ..EvRequest::new(100.0)
        })
        .unwrap_err();
        assert_eq!(err, EvError::InvalidPreviousCashValue);
    }

    #[test]
    fn test_single_ticket_gets_almost_unshared_jackpot() {
        // One ticket sold: lambda ~ 3.4e-9, so the jackpot EV collapses to
        // cash / 292,201,338.
        let report = compute_ev(&EvRequest {
            tickets_sold: Some(1.0),
            ..EvRequest::new(100_000_000.0)
        })
        .expect("valid");
        assert_eq!(report.tickets_source, TicketsSource::Manual);
        let unshared = 100_000_000.0 / JACKPOT_ODDS;
        let rel = (report.jackpot_ev_per_ticket - unshared).abs() / unshared;
        assert!(rel < 1e-6, "jackpot EV={}", report.jackpot_ev_per_ticket);
    }

    #[test]
    fn test_manual_tickets_beat_delta_inference() {
        let report = compute_ev(&EvRequest {
            prev_cash_value: Some(300_000_000.0),
            tickets_sold: Some(50_000_000.0),
            ..EvRequest::new(400_000_000.0)
        })
        .expect("valid");
        assert_eq!(report.tickets_source, TicketsSource::Manual);
        assert_eq!(report.tickets_estimate, 50_000_000.0);
    }

    #[test]
    fn test_tax_hits_only_the_jackpot_component() {
        let untaxed = compute_ev(&EvRequest::new(500_000_000.0)).expect("valid");
        let taxed = compute_ev(&EvRequest {
            federal_tax_rate: 0.37,
            state_tax_rate: 0.03,
            ..EvRequest::new(500_000_000.0)
        })
        .expect("valid");

        // Lower tiers bit-identical regardless of tax inputs.
        assert_eq!(untaxed.lower_ev_per_ticket, taxed.lower_ev_per_ticket);

        // total(0) - total(t) == jackpot(0) * t within fp tolerance.
        let diff = untaxed.total_ev_per_ticket - taxed.total_ev_per_ticket;
        let expected = untaxed.jackpot_ev_per_ticket * 0.40;
        assert!(
            (diff - expected).abs() < 1e-12,
            "diff={diff} expected={expected}"
        );
    }

    #[test]
    fn test_tax_rates_clamp() {
        // Absurd rates clamp to a combined 1.0: jackpot fully withheld.
        let report = compute_ev(&EvRequest {
            federal_tax_rate: 0.9,
            state_tax_rate: 0.9,
            ..EvRequest::new(500_000_000.0)
        })
        .expect("valid");
        assert_eq!(report.combined_tax_rate, 1.0);
        assert_eq!(report.jackpot_ev_per_ticket, 0.0);
        assert_eq!(report.total_ev_per_ticket, report.lower_ev_per_ticket);

        // Negative and non-finite rates clamp to zero.
        let report = compute_ev(&EvRequest {
            federal_tax_rate: -0.5,
            state_tax_rate: f64::NAN,
            ..EvRequest::new(500_000_000.0)
        })
        .expect("valid");
        assert_eq!(report.combined_tax_rate, 0.0);
    }

    #[test]
    fn test_lower_tier_ev_invariant_across_requests() {
        let a = compute_ev(&EvRequest::new(500_000_000.0)).expect("valid");
        let b = compute_ev(&EvRequest {
            prev_cash_value: Some(100_000_000.0),
            federal_tax_rate: 0.37,
            ..EvRequest::new(900_000_000.0)
        })
        .expect("valid");
        let c = compute_ev(&EvRequest {
            tickets_sold: Some(123_456.0),
            ..EvRequest::new(40_000_000.0)
        })
        .expect("valid");
        assert_eq!(a.lower_ev_per_ticket, b.lower_ev_per_ticket);
        assert_eq!(b.lower_ev_per_ticket, c.lower_ev_per_ticket);
    }

    #[test]
    fn test_bigger_jackpot_does_not_mean_proportionally_bigger_ev() {
        // Fallback inference couples ticket volume to cash value, so the
        // split model damps growth: doubling the cash must less than double
        // the jackpot EV.
        let small = compute_ev(&EvRequest::new(400_000_000.0)).expect("valid");
        let big = compute_ev(&EvRequest::new(800_000_000.0)).expect("valid");
        assert!(big.jackpot_ev_per_ticket > small.jackpot_ev_per_ticket);
        assert!(big.jackpot_ev_per_ticket < 2.0 * small.jackpot_ev_per_ticket);
    }
}
