/// Application-level error types for the calculator wiring.
/// The EV engine returns its own value-typed failures (`engine::EvError`);
/// everything here is the plumbing around it: configuration, the jackpot
/// figures feed, the contact endpoint.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("jackpot feed error: {0}")]
    JackpotFeed(String),

    #[error("contact endpoint error: {0}")]
    Contact(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
