// src/services/calculations.rs
use log::debug;
use crate::models::{Metrics, RawInputs};

pub const ZERO_METRIC: &str = "0.00";

const CTR_SCALE: f64 = 100.0;
const CPM_SCALE: f64 = 1000.0;

/// Coerce user-entered text into a number. Anything that is not plain decimal
/// notation (optionally signed, optionally with an exponent) becomes 0.
pub fn parse_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // f64::from_str also accepts "inf" and "NaN"
    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        debug!("Non-numeric input {:?} coerced to 0", raw);
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!("Non-numeric input {:?} coerced to 0", raw);
            0.0
        }
    }
}

/// Format with exactly two fractional digits, rounding exact ties away from
/// zero. Non-finite values render as "0.00".
pub fn format_fixed(value: f64) -> String {
    if !value.is_finite() {
        return ZERO_METRIC.to_string();
    }

    // Only multiples of 1/8 with an odd numerator sit exactly on x.xx5.
    // std formatting rounds those half-to-even, so handle them here.
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let n = eighths as u64;
        let cents = (25 * n + 1) / 2;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }

    format!("{:.2}", value)
}

fn guarded_ratio(numerator: f64, denominator: f64, scale: f64) -> String {
    if numerator != 0.0 && denominator != 0.0 {
        format_fixed((numerator / denominator) * scale)
    } else {
        ZERO_METRIC.to_string()
    }
}

pub fn calculate_cpc(budget: f64, clicks: f64) -> String {
    guarded_ratio(budget, clicks, 1.0)
}

pub fn calculate_ctr(clicks: f64, impressions: f64) -> String {
    guarded_ratio(clicks, impressions, CTR_SCALE)
}

pub fn calculate_cpm(budget: f64, impressions: f64) -> String {
    guarded_ratio(budget, impressions, CPM_SCALE)
}

/// Compute CPC, CTR and CPM from raw text. Never fails: a zero or
/// non-numeric operand turns only the affected metric into "0.00".
pub fn compute_metrics(budget: &str, clicks: &str, impressions: &str) -> Metrics {
    let budget = parse_or_zero(budget);
    let clicks = parse_or_zero(clicks);
    let impressions = parse_or_zero(impressions);

    Metrics {
        cpc: calculate_cpc(budget, clicks),
        ctr: calculate_ctr(clicks, impressions),
        cpm: calculate_cpm(budget, impressions),
    }
}

pub fn compute_from_inputs(inputs: &RawInputs) -> Metrics {
    compute_metrics(&inputs.budget, &inputs.clicks, &inputs.impressions)
}
