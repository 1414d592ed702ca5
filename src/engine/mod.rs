pub mod ev;
pub mod tickets;

pub use ev::compute_ev;

/// Dollars of each $2 ticket's price that feed the advertised cash jackpot.
/// Used to convert a cash-value delta between drawings into a ticket count.
pub const DEFAULT_CONTRIBUTION_PER_TICKET: f64 = 0.70;

/// Inputs for one EV computation.
///
/// Optional figures are absent-or-present, never NaN sentinels: the
/// inference chain in `tickets` branches on presence, so a blank input
/// cannot silently poison downstream math. A non-finite value inside a
/// `Some` is treated the same as absent.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct EvRequest {
    /// Advertised cash value of the upcoming drawing's jackpot (USD).
    pub cash_value: f64,
    /// Cash value at the previous drawing, for delta inference.
    pub prev_cash_value: Option<f64>,
    /// Manual override of the tickets-sold estimate.
    pub tickets_sold: Option<f64>,
    /// Federal withholding rate in [0, 1]; clamped.
    pub federal_tax_rate: f64,
    /// State withholding rate in [0, 1]; clamped.
    pub state_tax_rate: f64,
    /// Dollars per ticket flowing into the cash jackpot pool.
    pub contribution_per_ticket: f64,
}

impl EvRequest {
    /// Request with no previous-drawing figure, no manual ticket count,
    /// no withholding, and the standard contribution rate.
    pub fn new(cash_value: f64) -> Self {
        Self {
            cash_value,
            prev_cash_value: None,
            tickets_sold: None,
            federal_tax_rate: 0.0,
            state_tax_rate: 0.0,
            contribution_per_ticket: DEFAULT_CONTRIBUTION_PER_TICKET,
        }
    }
}

/// Which inference method produced the tickets-sold estimate.
/// Exactly one method is active per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketsSource {
    /// Operator-supplied count, used verbatim.
    Manual,
    /// (cash - previous cash) / contribution per ticket.
    CashDelta,
    /// cash / contribution per ticket: treats the whole pool as proceeds of
    /// the current drawing. Deliberately crude; only used when nothing
    /// better is available.
    PoolFallback,
}

impl std::fmt::Display for TicketsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual override"),
            Self::CashDelta => write!(f, "cash delta"),
            Self::PoolFallback => write!(f, "pool fallback"),
        }
    }
}

/// One computed report. Every intermediate the engine derived is carried
/// so callers can render or log what they need.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct EvReport {
    pub cash_value: f64,
    pub tickets_estimate: f64,
    pub tickets_source: TicketsSource,
    /// Expected count of OTHER jackpot-matching tickets this drawing.
    pub lambda_others: f64,
    /// clamp01(federal + state), applied to the jackpot component only.
    pub combined_tax_rate: f64,
    /// Expected pre-tax payout to our ticket conditional on winning.
    pub expected_share_if_win: f64,
    pub jackpot_ev_per_ticket: f64,
    pub lower_ev_per_ticket: f64,
    pub total_ev_per_ticket: f64,
}

/// Validation failures, returned as values. The engine never panics and
/// has no exception boundary of its own; the caller decides how to surface
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvError {
    #[error("cash value must be a finite number >= 0")]
    InvalidCashValue,

    #[error("previous cash value exceeds current cash value; the sales delta would be negative")]
    InvalidPreviousCashValue,
}
