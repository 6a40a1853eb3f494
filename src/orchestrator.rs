use tracing::{debug, info, warn};

use crate::charts;
use crate::client::PredictionClient;
use crate::config::AppSettings;
use crate::error::{PredictError, Result};
use crate::schemas::PredictionRequest;
use crate::state::{InputRecord, RenderResult};

/// Fixed user-facing message when the service answers with a failure status.
const CONNECTIVITY_ERROR: &str = "Error en la predicción: No se pudo conectar a la API";

/// Turns trigger events into render results
///
/// One cycle reads the current input record, posts it to the prediction
/// service and interprets the outcome. Every failure is absorbed here and
/// rendered as a message; nothing propagates to the caller.
#[derive(Debug, Clone)]
pub struct PredictionOrchestrator {
    client: PredictionClient,
}

impl PredictionOrchestrator {
    /// Create an orchestrator with its own client built from the settings.
    pub fn new(settings: &AppSettings) -> Result<Self> {
        Ok(Self {
            client: PredictionClient::new(settings)?,
        })
    }

    /// Create an orchestrator around an existing client.
    pub fn with_client(client: PredictionClient) -> Self {
        Self { client }
    }

    /// Handle one trigger event against the given input record.
    ///
    /// A `trigger_count` of zero means the button has never been pressed:
    /// the placeholder result is returned and no request is made. Any later
    /// count runs one full cycle. The returned result always replaces the
    /// previous one wholesale.
    pub fn handle_trigger(&self, trigger_count: u64, inputs: &InputRecord) -> RenderResult {
        if trigger_count == 0 {
            return RenderResult::placeholder();
        }

        debug!("Handling prediction trigger #{}", trigger_count);
        let request = PredictionRequest::from(inputs);

        match self.client.predict(&request) {
            Ok(prediction) => {
                info!(
                    "Rendering prediction: riesgo={}, probabilidad={}",
                    prediction.riesgo, prediction.probabilidad
                );
                RenderResult {
                    message: format!(
                        "Probabilidad de incumplimiento: {:.2}. Riesgo: {}",
                        prediction.probabilidad, prediction.riesgo
                    ),
                    roc_figure: charts::roc_figure(),
                    influence_figure: charts::influence_figure(),
                }
            }
            Err(PredictError::Status(status)) => {
                warn!("Prediction service returned status {}", status);
                RenderResult {
                    message: CONNECTIVITY_ERROR.to_string(),
                    roc_figure: charts::empty_figure(),
                    influence_figure: charts::empty_figure(),
                }
            }
            Err(err) => {
                warn!("Prediction request failed: {}", err);
                RenderResult {
                    message: format!("Error: {}", err),
                    roc_figure: charts::empty_figure(),
                    influence_figure: charts::empty_figure(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untriggered_cycle_makes_no_request() {
        // Nothing listens here; an attempted request would render an error,
        // not the placeholder.
        let settings = AppSettings {
            api_url: "http://127.0.0.1:9/api/v1/predict".to_string(),
            request_timeout_ms: 1_000,
        };
        let orchestrator = PredictionOrchestrator::new(&settings).unwrap();

        let result = orchestrator.handle_trigger(0, &InputRecord::default());

        assert_eq!(result.message, "");
    }
}
