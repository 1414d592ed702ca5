use crate::errors::{AppError, AppResult};
use reqwest::Client;

/// Client for the Cloudflare worker that republishes the advertised
/// jackpot figures. Auto-fills the current and previous cash values so the
/// operator only types what the feed can't know.
///
/// The engine never touches this module; `main` feeds the fetched figures
/// into an `EvRequest` like any manually entered ones.

/// The two figures one EV computation needs, plus when the worker scraped
/// them.
#[derive(Debug, Clone, Copy)]
pub struct JackpotFigures {
    /// Advertised cash value for the upcoming drawing (USD).
    pub next_cash_value: f64,
    /// Cash value at the previous drawing (USD).
    pub prev_cash_value: f64,
    pub fetched_at: Option<chrono::DateTime<chrono::Utc>>,
}

// Worker response format:
// {
//   "next": { "cashValue": 231400000 },
//   "prev": { "cashValue": 199300000 },
//   "fetchedAt": "2026-08-07T14:00:00Z"
// }
// The non-versioned endpoint sometimes returns nulls; always call with ?v=1.

#[derive(serde::Deserialize)]
struct WorkerResponse {
    next: Option<DrawingFigures>,
    prev: Option<DrawingFigures>,
    #[serde(rename = "fetchedAt")]
    fetched_at: Option<String>,
}

#[derive(serde::Deserialize)]
struct DrawingFigures {
    #[serde(rename = "cashValue")]
    cash_value: Option<f64>,
}

pub struct JackpotFeed {
    client: Client,
    url: String,
}

impl JackpotFeed {
    pub fn new(url: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Fetch and validate the current and previous cash values.
    pub async fn fetch(&self) -> AppResult<JackpotFigures> {
        let resp = self
            .client
            .get(&self.url)
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|e| AppError::JackpotFeed(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::JackpotFeed(format!("HTTP {status}: {body}")));
        }

        let data: WorkerResponse = resp
            .json()
            .await
            .map_err(|e| AppError::JackpotFeed(format!("parse: {e}")))?;

        figures_from_response(data)
    }
}

fn figures_from_response(data: WorkerResponse) -> AppResult<JackpotFigures> {
    let next_cash_value = data
        .next
        .and_then(|d| d.cash_value)
        .ok_or_else(|| AppError::JackpotFeed("missing next.cashValue".into()))?;
    let prev_cash_value = data
        .prev
        .and_then(|d| d.cash_value)
        .ok_or_else(|| AppError::JackpotFeed("missing prev.cashValue".into()))?;

    for (label, v) in [("next", next_cash_value), ("prev", prev_cash_value)] {
        if !v.is_finite() || v < 0.0 {
            return Err(AppError::JackpotFeed(format!(
                "invalid {label} cash value: {v}"
            )));
        }
    }

    let fetched_at = data
        .fetched_at
        .as_deref()
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&chrono::Utc));

    Ok(JackpotFigures {
        next_cash_value,
        prev_cash_value,
        fetched_at,
    })
}
