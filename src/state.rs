use plotly::Plot;

use crate::charts;

/// The six customer attributes the dashboard collects
///
/// Every slot is optional: a field stays `None` until the user enters a
/// value, and values are passed through without range checks. Validation is
/// the prediction service's responsibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRecord {
    /// Approved credit limit
    pub credit_limit: Option<f64>,
    /// Age in years
    pub age: Option<f64>,
    /// Gender code (1 = male, 2 = female)
    pub sex: Option<f64>,
    /// Education level code (1 = postgraduate, 2 = university, 3 = high school, 4 = other)
    pub education: Option<f64>,
    /// Marital status code (1 = married, 2 = single, 3 = other)
    pub marriage: Option<f64>,
    /// Most recent payment status (-1 = paid on time, 1-9 = months of delay)
    pub pay_status: Option<f64>,
}

/// Selector for one input slot of the view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    CreditLimit,
    Age,
    Sex,
    Education,
    Marriage,
    PayStatus,
}

/// Everything one trigger renders: the status line and both figures
#[derive(Clone)]
pub struct RenderResult {
    /// Status line shown above the charts
    pub message: String,
    /// ROC curve figure
    pub roc_figure: Plot,
    /// Influence-factor bar chart figure
    pub influence_figure: Plot,
}

impl RenderResult {
    /// The untriggered display: no message and two bare figures.
    pub fn placeholder() -> Self {
        Self {
            message: String::new(),
            roc_figure: charts::empty_figure(),
            influence_figure: charts::empty_figure(),
        }
    }
}

impl Default for RenderResult {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Holder for everything the dashboard displays
///
/// The holder is plain storage for the input slots and the currently
/// rendered result. Reading the inputs, calling the service and producing
/// the next result is the orchestrator's job; each stored result fully
/// replaces the previous one.
#[derive(Clone, Default)]
pub struct ViewState {
    inputs: InputRecord,
    result: RenderResult,
}

impl ViewState {
    /// Fresh view state: all inputs unset, placeholder result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a single input value. `None` clears the slot.
    pub fn set_input(&mut self, field: InputField, value: Option<f64>) {
        match field {
            InputField::CreditLimit => self.inputs.credit_limit = value,
            InputField::Age => self.inputs.age = value,
            InputField::Sex => self.inputs.sex = value,
            InputField::Education => self.inputs.education = value,
            InputField::Marriage => self.inputs.marriage = value,
            InputField::PayStatus => self.inputs.pay_status = value,
        }
    }

    /// Snapshot of the current input record.
    pub fn get_inputs(&self) -> InputRecord {
        self.inputs.clone()
    }

    /// Replace the rendered result with the outcome of a trigger.
    pub fn set_result(&mut self, result: RenderResult) {
        self.result = result;
    }

    /// The currently rendered result.
    pub fn get_result(&self) -> &RenderResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure_trace_count(plot: &Plot) -> usize {
        let value = serde_json::to_value(plot).unwrap();
        value["data"].as_array().map(|data| data.len()).unwrap_or(0)
    }

    #[test]
    fn new_state_starts_with_placeholder_result() {
        let state = ViewState::new();

        assert_eq!(state.get_inputs(), InputRecord::default());
        assert_eq!(state.get_result().message, "");
        assert_eq!(figure_trace_count(&state.get_result().roc_figure), 0);
        assert_eq!(figure_trace_count(&state.get_result().influence_figure), 0);
    }

    #[test]
    fn set_input_updates_only_the_addressed_slot() {
        let mut state = ViewState::new();

        state.set_input(InputField::Age, Some(35.0));
        state.set_input(InputField::PayStatus, Some(-1.0));

        let inputs = state.get_inputs();
        assert_eq!(inputs.age, Some(35.0));
        assert_eq!(inputs.pay_status, Some(-1.0));
        assert_eq!(inputs.credit_limit, None);
        assert_eq!(inputs.sex, None);
    }

    #[test]
    fn set_input_with_none_clears_the_slot() {
        let mut state = ViewState::new();

        state.set_input(InputField::CreditLimit, Some(50_000.0));
        state.set_input(InputField::CreditLimit, None);

        assert_eq!(state.get_inputs().credit_limit, None);
    }

    #[test]
    fn set_result_replaces_the_previous_result() {
        let mut state = ViewState::new();

        state.set_result(RenderResult {
            message: "first".to_string(),
            ..RenderResult::placeholder()
        });
        state.set_result(RenderResult {
            message: "second".to_string(),
            ..RenderResult::placeholder()
        });

        assert_eq!(state.get_result().message, "second");
    }
}
