//! Fixed dashboard figures.
//!
//! Both charts are illustrative: the curve points and the factor weights are
//! hardcoded and do not depend on the submitted inputs or on the service
//! response. A successful prediction shows them, every other outcome shows
//! bare figures.

use plotly::common::Mode;
use plotly::{Bar, Layout, Plot, Scatter};

/// Points of the illustrative ROC curve, as (false positive rate, true positive rate).
const ROC_POINTS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.1, 0.3),
    (0.2, 0.5),
    (0.5, 0.7),
    (0.7, 0.9),
    (1.0, 1.0),
];

/// Influence factors and their illustrative importance weights.
const INFLUENCE_FACTORS: [(&str, f64); 3] = [
    ("Límite de Crédito", 0.5),
    ("Edad", 0.3),
    ("Historial de Pagos", 0.2),
];

/// ROC curve figure shown after a successful prediction.
pub fn roc_figure() -> Plot {
    let fpr: Vec<f64> = ROC_POINTS.iter().map(|(fpr, _)| *fpr).collect();
    let tpr: Vec<f64> = ROC_POINTS.iter().map(|(_, tpr)| *tpr).collect();

    let trace = Scatter::new(fpr, tpr).mode(Mode::Lines);

    let layout = Layout::new()
        .title(plotly::common::Title::with_text("Curva ROC"))
        .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("FPR")))
        .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("TPR")));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Influence-factor bar chart shown after a successful prediction.
pub fn influence_figure() -> Plot {
    let variables: Vec<String> = INFLUENCE_FACTORS
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    let importances: Vec<f64> = INFLUENCE_FACTORS
        .iter()
        .map(|(_, weight)| *weight)
        .collect();

    let trace = Bar::new(variables, importances);

    let layout = Layout::new()
        .title(plotly::common::Title::with_text("Factores de Influencia"))
        .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Variables")))
        .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Importancia")));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Bare figure used before the first trigger and on every failure path.
pub fn empty_figure() -> Plot {
    Plot::new()
}
