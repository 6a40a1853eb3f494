//! Wire-format types for the remote prediction service.
//!
//! These structs mirror the service's request and response payloads so the
//! dashboard never builds JSON by hand. The request keys follow the service's
//! uppercase naming and must not be changed on this side.

use serde::{Deserialize, Serialize};

use crate::state::InputRecord;

/// Request body for the prediction endpoint
///
/// Values travel verbatim from the input record; a slot the user left empty
/// is serialized as a JSON `null` rather than omitted, matching what the
/// service expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    /// Approved credit limit
    #[serde(rename = "LIMIT_BAL")]
    pub limit_bal: Option<f64>,
    /// Customer age in years
    #[serde(rename = "AGE")]
    pub age: Option<f64>,
    /// Most recent payment status (-1 = paid on time, 1-9 = months of delay)
    #[serde(rename = "PAY_0")]
    pub pay_0: Option<f64>,
    /// Gender code (1 = male, 2 = female)
    #[serde(rename = "SEX")]
    pub sex: Option<f64>,
    /// Education level code (1 = postgraduate, 2 = university, 3 = high school, 4 = other)
    #[serde(rename = "EDUCATION")]
    pub education: Option<f64>,
    /// Marital status code (1 = married, 2 = single, 3 = other)
    #[serde(rename = "MARRIAGE")]
    pub marriage: Option<f64>,
}

impl From<&InputRecord> for PredictionRequest {
    fn from(inputs: &InputRecord) -> Self {
        Self {
            limit_bal: inputs.credit_limit,
            age: inputs.age,
            pay_0: inputs.pay_status,
            sex: inputs.sex,
            education: inputs.education,
            marriage: inputs.marriage,
        }
    }
}

/// Response body of the prediction endpoint
///
/// Only the probability and the risk label are consumed here; any extra
/// fields the service returns are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    /// Estimated default probability, expected in [0, 1]
    pub probabilidad: f64,
    /// Risk label assigned by the service (e.g. "Alto", "Bajo")
    pub riesgo: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn request_serializes_service_keys_with_nulls() {
        let inputs = InputRecord {
            credit_limit: Some(20_000.0),
            age: Some(35.0),
            sex: None,
            education: Some(2.0),
            marriage: None,
            pay_status: Some(-1.0),
        };

        let value = serde_json::to_value(PredictionRequest::from(&inputs)).unwrap();

        assert_eq!(
            value,
            json!({
                "LIMIT_BAL": 20_000.0,
                "AGE": 35.0,
                "PAY_0": -1.0,
                "SEX": null,
                "EDUCATION": 2.0,
                "MARRIAGE": null,
            })
        );
    }

    #[test]
    fn request_with_no_inputs_is_all_nulls() {
        let value = serde_json::to_value(PredictionRequest::from(&InputRecord::default())).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert!(object.values().all(|slot| *slot == Value::Null));
    }

    #[test]
    fn response_parses_probability_and_risk() {
        let body = r#"{"probabilidad": 0.42, "riesgo": "Alto"}"#;

        let response: PredictionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.probabilidad, 0.42);
        assert_eq!(response.riesgo, "Alto");
    }

    #[test]
    fn response_ignores_extra_fields() {
        let body = r#"{"probabilidad": 0.07, "riesgo": "Bajo", "model_version": "v3"}"#;

        let response: PredictionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.probabilidad, 0.07);
        assert_eq!(response.riesgo, "Bajo");
    }

    #[test]
    fn response_without_probability_is_an_error() {
        let body = r#"{"riesgo": "Alto"}"#;

        let parsed: Result<PredictionResponse, _> = serde_json::from_str(body);

        assert!(parsed.is_err());
    }
}
