//! Core of a credit-card default-risk dashboard.
//!
//! The crate owns everything between the input widgets and the screen: the
//! typed view state, the blocking client for the remote prediction service
//! and the orchestration of one trigger cycle into a message plus two plotly
//! figures. Rendering the widgets themselves is left to the embedding shell.

mod charts;
mod client;
mod config;
mod error;
mod orchestrator;
mod schemas;
mod state;


pub use client::PredictionClient;
pub use config::AppSettings;
pub use error::{PredictError, Result};
pub use orchestrator::PredictionOrchestrator;
pub use schemas::{PredictionRequest, PredictionResponse};
pub use state::{InputField, InputRecord, RenderResult, ViewState};
