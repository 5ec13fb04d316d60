// src/services/page.rs
use crate::models::{
    CalculatorPage, InputField, InputFieldView, MetricCard, MetricKind, Metrics, MetricsResponse,
    RawInputs, TipsSection,
};
use crate::services::calculations::compute_from_inputs;

pub const HEADING: &str = "LinkedIn Ads CPC Calculator";
pub const SUBTITLE: &str = "Calculate and optimize your LinkedIn advertising metrics";
pub const TIPS_HEADING: &str = "Optimization Tips";

const TIPS: [&str; 3] = [
    "Average LinkedIn CPC ranges from $5.26 to $8.59 across industries",
    "A good CTR for LinkedIn ads is typically between 0.44% to 0.65%",
    "Optimize targeting and ad creative to improve performance metrics",
];

pub fn optimization_tips() -> TipsSection {
    TipsSection {
        heading: TIPS_HEADING.to_string(),
        tips: TIPS.iter().map(|tip| tip.to_string()).collect(),
    }
}

/// One card per metric, in CPC, CTR, CPM order.
pub fn build_cards(metrics: &Metrics) -> Vec<MetricCard> {
    MetricKind::ALL
        .iter()
        .map(|&kind| {
            let value = match kind {
                MetricKind::Cpc => &metrics.cpc,
                MetricKind::Ctr => &metrics.ctr,
                MetricKind::Cpm => &metrics.cpm,
            };
            MetricCard {
                kind,
                title: kind.title().to_string(),
                value: value.clone(),
                display: kind.decorate(value),
            }
        })
        .collect()
}

pub fn metrics_response(inputs: RawInputs) -> MetricsResponse {
    let metrics = compute_from_inputs(&inputs);
    let cards = build_cards(&metrics);
    MetricsResponse {
        inputs,
        metrics,
        cards,
    }
}

pub fn calculator_page(inputs: &RawInputs) -> CalculatorPage {
    let fields = InputField::ALL
        .iter()
        .map(|&field| InputFieldView {
            field,
            label: field.label().to_string(),
            placeholder: field.placeholder().to_string(),
            value: inputs.get(field).to_string(),
        })
        .collect();

    CalculatorPage {
        heading: HEADING.to_string(),
        subtitle: SUBTITLE.to_string(),
        fields,
        cards: build_cards(&compute_from_inputs(inputs)),
        tips: optimization_tips(),
    }
}
