use crate::errors::{AppError, AppResult};

/// Contact-form submission client. POSTs JSON to the worker's /contact
/// endpoint. Independent of the EV engine; swap it out freely.

/// Outgoing message. `website` is a honeypot: humans leave it empty and
/// the worker drops any submission where a bot filled it in.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ContactMessage {
    pub website: String,
    #[serde(rename = "fromEmail")]
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(from_email: &str, subject: &str, message: &str) -> Self {
        Self {
            website: String::new(),
            from_email: from_email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Default, serde::Deserialize)]
struct ContactResponse {
    ok: Option<bool>,
    error: Option<String>,
}

pub async fn send_message(
    client: &reqwest::Client,
    endpoint: &str,
    msg: &ContactMessage,
) -> AppResult<()> {
    let resp = client
        .post(endpoint)
        .json(msg)
        .send()
        .await
        .map_err(|e| AppError::Contact(format!("request failed: {e}")))?;

    let status = resp.status();
    let body: ContactResponse = resp.json().await.unwrap_or_default();

    if !status.is_success() || body.ok != Some(true) {
        return Err(AppError::Contact(
            body.error.unwrap_or_else(|| format!("HTTP {status}")),
        ));
    }
    Ok(())
}
