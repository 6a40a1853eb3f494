use std::time::Duration;

use tracing::warn;

/// Default endpoint of the remote prediction service.
const DEFAULT_API_URL: &str = "http://54.234.146.136:8000/api/v1/predict";

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Application settings for the dashboard core
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Full URL of the prediction endpoint
    pub api_url: String,
    /// Timeout for one prediction request, in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AppSettings {
    /// Load settings from the environment, falling back to the defaults.
    ///
    /// Reads `PREDICT_API_URL` and `PREDICT_TIMEOUT_MS`, with a `.env` file
    /// honored when present. An unparseable timeout is logged and replaced by
    /// the default rather than failing startup.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url =
            std::env::var("PREDICT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout_ms = match std::env::var("PREDICT_TIMEOUT_MS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PREDICT_TIMEOUT_MS value: {}", raw);
                DEFAULT_TIMEOUT_MS
            }),
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Self {
            api_url,
            request_timeout_ms,
        }
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
