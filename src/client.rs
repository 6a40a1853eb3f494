//! HTTP client for the remote prediction service.

use reqwest::blocking::Client;
use tracing::{debug, error, info, warn};

use crate::config::AppSettings;
use crate::error::{PredictError, Result};
use crate::schemas::{PredictionRequest, PredictionResponse};

/// Blocking client for posting prediction requests to the service.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    api_url: String,
}

impl PredictionClient {
    /// Create a new client with the given settings.
    ///
    /// The timeout from the settings is enforced on every request, so a
    /// silent service cannot stall a prediction cycle indefinitely.
    pub fn new(settings: &AppSettings) -> Result<Self> {
        let http = Client::builder().timeout(settings.request_timeout()).build()?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
        })
    }

    /// The endpoint this client posts to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send one prediction request and parse the service's answer.
    ///
    /// Blocks until the service responds, the connection fails, or the
    /// configured timeout elapses.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        debug!("POST request to: {}", self.api_url);

        let response = self.http.post(&self.api_url).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Prediction service answered with status {}", status);
            return Err(PredictError::Status(status));
        }

        let body = response.text()?;
        let prediction: PredictionResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response: {}", body);
            PredictError::Json(e)
        })?;

        info!(
            "Prediction received: riesgo={}, probabilidad={}",
            prediction.riesgo, prediction.probabilidad
        );
        Ok(prediction)
    }
}
