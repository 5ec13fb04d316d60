// src/services/form.rs
use log::debug;
use crate::models::{InputField, Metrics, RawInputs};
use crate::services::calculations::compute_from_inputs;

/// Page state for one user: the raw text of each field. Metrics are derived
/// on every read and never stored.
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    inputs: RawInputs,
}

impl CalculatorForm {
    pub fn new(inputs: RawInputs) -> Self {
        Self { inputs }
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    /// Apply one change event and return the metrics for the new state.
    pub fn set_field(&mut self, field: InputField, text: impl Into<String>) -> Metrics {
        let text = text.into();
        debug!("Field {} changed to {:?}", field, text);
        self.inputs.set(field, text);
        self.metrics()
    }

    pub fn metrics(&self) -> Metrics {
        compute_from_inputs(&self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_default_inputs() {
        let form = CalculatorForm::default();
        let metrics = form.metrics();
        assert_eq!(metrics.cpc, "10.00");
        assert_eq!(metrics.ctr, "1.00");
        assert_eq!(metrics.cpm, "100.00");
    }

    #[test]
    fn every_change_recomputes() {
        let mut form = CalculatorForm::default();

        let metrics = form.set_field(InputField::Clicks, "200");
        assert_eq!(metrics.cpc, "5.00");
        assert_eq!(metrics.ctr, "2.00");
        assert_eq!(metrics.cpm, "100.00");

        let metrics = form.set_field(InputField::Impressions, "");
        assert_eq!(metrics.cpc, "5.00");
        assert_eq!(metrics.ctr, "0.00");
        assert_eq!(metrics.cpm, "0.00");

        let metrics = form.set_field(InputField::Impressions, "40000");
        assert_eq!(metrics.ctr, "0.50");
        assert_eq!(metrics.cpm, "25.00");
    }

    #[test]
    fn metrics_never_go_stale() {
        let mut form = CalculatorForm::new(RawInputs::empty());
        assert_eq!(form.metrics().cpc, "0.00");

        form.set_field(InputField::Budget, "90");
        form.set_field(InputField::Clicks, "9");
        assert_eq!(form.metrics().cpc, "10.00");
        assert_eq!(form.inputs().budget, "90");
    }
}
