mod config;
mod contact;
mod engine;
mod errors;
mod feeds;
mod models;
mod report;
mod taxes;

use crate::engine::{compute_ev, tickets, EvRequest};
use crate::feeds::worker_api::JackpotFeed;
use crate::taxes::TaxTable;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    // `powerball_ev contact <from-email> <subject> <message...>` sends a
    // message through the worker and exits.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("contact") {
        run_contact(&cfg, &args[1..]).await;
        return;
    }

    let taxes = TaxTable::top_rates_2025();
    let state_tax_rate = match taxes.rate(&cfg.state_code) {
        Some(rate) => {
            tracing::info!(
                state = %taxes.name(&cfg.state_code).unwrap_or(&cfg.state_code),
                rate = rate,
                "state withholding resolved"
            );
            rate
        }
        None => {
            tracing::warn!(code = %cfg.state_code, "unknown state code, assuming 0% state tax");
            0.0
        }
    };

    let feed = JackpotFeed::new(&cfg.worker_url);

    run_once(&cfg, &feed, state_tax_rate).await;

    // Recompute on demand is the norm; a fixed refresh interval is opt-in
    // for terminals left open across drawings.
    if let Some(secs) = cfg.refresh_interval_secs {
        let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(secs.max(1)));
        interval.tick().await; // first tick fires immediately; already ran
        loop {
            interval.tick().await;
            run_once(&cfg, &feed, state_tax_rate).await;
        }
    }
}

/// One fetch-compute-render pass. Feed problems degrade to whatever manual
/// figures exist; only a missing cash value makes the pass a no-op.
async fn run_once(cfg: &config::AppConfig, feed: &JackpotFeed, state_tax_rate: f64) {
    let mut cash_value = cfg.cash_value;
    let mut prev_cash_value = cfg.prev_cash_value;

    let need_feed =
        cash_value.is_none() || (prev_cash_value.is_none() && cfg.tickets_sold.is_none());
    if need_feed {
        match feed.fetch().await {
            Ok(figures) => {
                tracing::info!(
                    next = figures.next_cash_value,
                    prev = figures.prev_cash_value,
                    fetched_at = ?figures.fetched_at,
                    "jackpot figures fetched"
                );
                if let Some(auto) = tickets::tickets_from_cash_delta(
                    figures.next_cash_value,
                    figures.prev_cash_value,
                    cfg.contribution_per_ticket,
                ) {
                    tracing::debug!(tickets = auto.round(), "auto ticket estimate from feed delta");
                }
                cash_value.get_or_insert(figures.next_cash_value);
                prev_cash_value.get_or_insert(figures.prev_cash_value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "jackpot feed unavailable, using manual figures only");
            }
        }
    }

    let Some(cash_value) = cash_value else {
        tracing::error!("no cash value available (feed down and CASH_VALUE unset)");
        return;
    };

    if let (Some(n), None) = (cfg.tickets_sold, prev_cash_value) {
        if let Some(implied) =
            tickets::prev_cash_from_tickets(cash_value, n, cfg.contribution_per_ticket)
        {
            tracing::debug!(
                implied_prev_cash = implied,
                "manual ticket count implies a previous cash value"
            );
        }
    }

    let request = EvRequest {
        prev_cash_value,
        tickets_sold: cfg.tickets_sold,
        federal_tax_rate: cfg.federal_tax_rate,
        state_tax_rate,
        contribution_per_ticket: cfg.contribution_per_ticket,
        ..EvRequest::new(cash_value)
    };

    match compute_ev(&request) {
        Ok(ev_report) => {
            tracing::info!(
                total_ev = ev_report.total_ev_per_ticket,
                jackpot_ev = ev_report.jackpot_ev_per_ticket,
                lambda = ev_report.lambda_others,
                source = %ev_report.tickets_source,
                "EV computed"
            );
            tracing::debug!(
                exact = models::winner::prob_at_least_one_winner(ev_report.tickets_estimate),
                poisson = models::winner::prob_at_least_one_winner_poisson(ev_report.tickets_estimate),
                "drawing-level winner odds"
            );
            println!("{}", report::render(&ev_report, cfg.ticket_price));
        }
        Err(e) => {
            tracing::error!("EV computation failed: {e}");
        }
    }
}

async fn run_contact(cfg: &config::AppConfig, args: &[String]) {
    if args.len() < 3 {
        tracing::error!("usage: powerball_ev contact <from-email> <subject> <message...>");
        std::process::exit(2);
    }
    let msg = contact::ContactMessage::new(&args[0], &args[1], &args[2..].join(" "));

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_default();

    match contact::send_message(&client, &cfg.contact_endpoint, &msg).await {
        Ok(()) => tracing::info!("message sent"),
        Err(e) => {
            tracing::error!("send failed: {e}");
            std::process::exit(1);
        }
    }
}
