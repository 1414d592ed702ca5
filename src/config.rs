use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub worker_url: String,
    pub contact_endpoint: String,
    /// Manual overrides; whatever is unset gets auto-filled from the feed.
    pub cash_value: Option<f64>,
    pub prev_cash_value: Option<f64>,
    pub tickets_sold: Option<f64>,
    pub federal_tax_rate: f64,
    pub state_code: String,
    pub contribution_per_ticket: f64,
    /// Face price of one ticket, for the edge line in the report.
    pub ticket_price: f64,
    /// When set, rerun the fetch-compute-render pass on this interval.
    pub refresh_interval_secs: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let federal_tax_rate = env_var_or("FED_TAX_RATE", "0.37")
            .parse::<f64>()
            .map_err(|e| AppError::Config(format!("FED_TAX_RATE: {e}")))?;

        let contribution_per_ticket = env_var_or("CONTRIBUTION_PER_TICKET", "0.70")
            .parse::<f64>()
            .map_err(|e| AppError::Config(format!("CONTRIBUTION_PER_TICKET: {e}")))?;

        let ticket_price = env_var_or("TICKET_PRICE", "2.0")
            .parse::<f64>()
            .map_err(|e| AppError::Config(format!("TICKET_PRICE: {e}")))?;

        Ok(Self {
            worker_url: env_var_or(
                "WORKER_URL",
                "https://powerball-ev-data.ben-augustine319.workers.dev/powerball?v=1",
            ),
            contact_endpoint: env_var_or(
                "CONTACT_ENDPOINT",
                "https://powerball-ev-data.ben-augustine319.workers.dev/contact",
            ),
            cash_value: opt_env_f64("CASH_VALUE")?,
            prev_cash_value: opt_env_f64("PREV_CASH_VALUE")?,
            tickets_sold: opt_env_f64("TICKETS_SOLD")?,
            federal_tax_rate,
            state_code: env_var_or("STATE_CODE", "IA"),
            contribution_per_ticket,
            ticket_price,
            refresh_interval_secs: opt_env_u64("REFRESH_INTERVAL_SECS")?,
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Optional numeric input. Blank counts as unset; thousands separators
/// are stripped, so CASH_VALUE="231,400,000" parses.
fn opt_env_f64(key: &str) -> AppResult<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{key}: {e}"))),
        _ => Ok(None),
    }
}

fn opt_env_u64(key: &str) -> AppResult<Option<u64>> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{key}: {e}"))),
        _ => Ok(None),
    }
}
