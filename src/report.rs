use crate::engine::EvReport;
use crate::models::winner::{prob_at_least_one_winner, prob_rollover};

/// Presentation layer: currency strings and descriptive notes.
/// Consumes a finished `EvReport`; never consulted by the engine.

/// Placeholder shown for figures that cannot be formatted.
const PLACEHOLDER: &str = "\u{2014}";

/// USD with cents, thousands-grouped: 1234.5 -> "$1,234.50".
pub fn money(n: f64) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    let abs = n.abs();
    let whole = abs.trunc();
    let cents = ((abs - whole) * 100.0).round() as u64;
    // 99.999 rounds its cents up to 100; carry into the dollar part
    let (whole, cents) = if cents >= 100 {
        (whole + 1.0, 0)
    } else {
        (whole, cents)
    };
    format!("{sign}${}.{cents:02}", group_thousands(whole))
}

/// USD without cents, rounded: 1234567.8 -> "$1,234,568".
pub fn money0(n: f64) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(n.abs().round()))
}

/// Thousands-grouped integer: 714285714.3 -> "714,285,714".
pub fn int(n: f64) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(n.abs().round()))
}

/// Fraction as a percentage with two decimals: 0.9133 -> "91.33%".
pub fn pct(x: f64) -> String {
    if !x.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.2}%", 100.0 * x)
}

fn group_thousands(abs_whole: f64) -> String {
    let digits = format!("{:.0}", abs_whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Human-readable summary of one EV computation, including the edge
/// against the ticket's face price and the drawing-level winner odds.
pub fn render(report: &EvReport, ticket_price: f64) -> String {
    let win = prob_at_least_one_winner(report.tickets_estimate);
    let roll = prob_rollover(report.tickets_estimate);

    let mut out = String::new();
    out.push_str(&format!("Cash value jackpot:      {}\n", money0(report.cash_value)));
    out.push_str(&format!(
        "Tickets sold estimate:   {} ({})\n",
        int(report.tickets_estimate),
        report.tickets_source
    ));
    out.push_str(&format!(
        "Expected co-winners:     {:.3}\n",
        report.lambda_others
    ));
    out.push_str(&format!(
        "Combined withholding:    {}\n",
        pct(report.combined_tax_rate)
    ));
    out.push_str(&format!(
        "Share if you win:        {}\n",
        money0(report.expected_share_if_win)
    ));
    out.push_str(&format!(
        "Jackpot EV per ticket:   {}\n",
        money(report.jackpot_ev_per_ticket)
    ));
    out.push_str(&format!(
        "Lower-tier EV (untaxed): {}\n",
        money(report.lower_ev_per_ticket)
    ));
    out.push_str(&format!(
        "Total EV per ticket:     {}\n",
        money(report.total_ev_per_ticket)
    ));
    out.push_str(&format!(
        "Edge vs {} ticket:    {}\n",
        money(ticket_price),
        money(report.total_ev_per_ticket - ticket_price)
    ));
    out.push_str(&format!(
        "P(someone wins): {}   P(rollover): {}",
        pct(win),
        pct(roll)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compute_ev, EvRequest};

    #[test]
    fn test_money_formats() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(1234.5), "$1,234.50");
        assert_eq!(money(-0.5), "-$0.50");
        assert_eq!(money(99.999), "$100.00");
        assert_eq!(money(f64::NAN), "\u{2014}");
    }

    #[test]
    fn test_money0_and_int_round() {
        assert_eq!(money0(1_234_567.8), "$1,234,568");
        assert_eq!(money0(-250.4), "-$250");
        assert_eq!(int(714_285_714.3), "714,285,714");
        assert_eq!(int(999.0), "999");
        assert_eq!(int(f64::INFINITY), "\u{2014}");
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(0.9133), "91.33%");
        assert_eq!(pct(0.0), "0.00%");
        assert_eq!(pct(f64::NAN), "\u{2014}");
    }

    #[test]
    fn test_render_carries_the_key_figures() {
        let report = compute_ev(&EvRequest::new(500_000_000.0)).expect("valid");
        let text = render(&report, 2.0);
        assert!(text.contains("$500,000,000"), "{text}");
        assert!(text.contains("714,285,714"), "{text}");
        assert!(text.contains("pool fallback"), "{text}");
        assert!(text.contains("$2.00"), "{text}");
    }
}
