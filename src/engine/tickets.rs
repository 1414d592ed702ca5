use super::{EvError, TicketsSource, DEFAULT_CONTRIBUTION_PER_TICKET};

/// Ticket-sales inference from jackpot economics.
///
/// Priority chain: manual override > cash-delta inference > whole-pool
/// fallback. Exactly one method is active per request; the chosen one is
/// reported back for transparency.

/// Floor for the per-ticket contribution divisor.
const MIN_CONTRIBUTION: f64 = 0.01;

/// A non-finite optional behaves like a blank field.
#[inline]
fn present(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// Sanitize the contribution figure: non-finite falls back to the standard
/// rate, tiny or negative values clamp so the division stays meaningful.
#[inline]
fn usable_contribution(contribution_per_ticket: f64) -> f64 {
    if !contribution_per_ticket.is_finite() {
        return DEFAULT_CONTRIBUTION_PER_TICKET;
    }
    contribution_per_ticket.max(MIN_CONTRIBUTION)
}

/// Resolve the tickets-sold estimate for a drawing.
///
/// A manual count <= 0 and a negative previous cash value are ignored
/// rather than rejected: the chain moves on to the next method. The only
/// hard failure is a usable previous cash value above the current one,
/// which would imply negative sales.
pub fn infer_tickets_sold(
    cash_value: f64,
    prev_cash_value: Option<f64>,
    tickets_sold: Option<f64>,
    contribution_per_ticket: f64,
) -> Result<(f64, TicketsSource), EvError> {
    let contribution = usable_contribution(contribution_per_ticket);

    if let Some(n) = present(tickets_sold) {
        if n > 0.0 {
            return Ok((n, TicketsSource::Manual));
        }
    }

    if let Some(prev) = present(prev_cash_value) {
        if prev >= 0.0 {
            let delta = cash_value - prev;
            if delta < 0.0 {
                return Err(EvError::InvalidPreviousCashValue);
            }
            return Ok((delta / contribution, TicketsSource::CashDelta));
        }
    }

    Ok((cash_value / contribution, TicketsSource::PoolFallback))
}

/// tickets = (cash - previous cash) / contribution. None when the delta is
/// not positive, so callers can fall back to another estimate.
pub fn tickets_from_cash_delta(
    cash_value: f64,
    prev_cash_value: f64,
    contribution_per_ticket: f64,
) -> Option<f64> {
    let delta = cash_value - prev_cash_value;
    if !delta.is_finite() || delta <= 0.0 {
        return None;
    }
    Some(delta / usable_contribution(contribution_per_ticket))
}

/// previous cash = cash - tickets * contribution. The inverse of the delta
/// method, for wiring that has a ticket count and needs the implied
/// previous-drawing figure.
pub fn prev_cash_from_tickets(
    cash_value: f64,
    tickets_sold: f64,
    contribution_per_ticket: f64,
) -> Option<f64> {
    if !tickets_sold.is_finite() || tickets_sold <= 0.0 {
        return None;
    }
    Some(cash_value - tickets_sold * usable_contribution(contribution_per_ticket))
}
