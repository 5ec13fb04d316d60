// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BUDGET: &str = "1000";
pub const DEFAULT_CLICKS: &str = "100";
pub const DEFAULT_IMPRESSIONS: &str = "10000";

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

// JSON numbers keep their literal text; null reads as empty text
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// The three text fields as typed by the user. Missing fields deserialize
/// as empty text, which the calculator treats as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    #[serde(default, deserialize_with = "text_or_number")]
    pub budget: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub clicks: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub impressions: String,
}

impl RawInputs {
    pub fn new(
        budget: impl Into<String>,
        clicks: impl Into<String>,
        impressions: impl Into<String>,
    ) -> Self {
        RawInputs {
            budget: budget.into(),
            clicks: clicks.into(),
            impressions: impressions.into(),
        }
    }

    /// All three fields empty.
    pub fn empty() -> Self {
        RawInputs::new("", "", "")
    }

    /// Build inputs from command-line arguments. `field=value` sets a named
    /// field; bare arguments fill budget, clicks, impressions in order.
    /// Unrecognised field names fall back to positional use.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut inputs = RawInputs::empty();
        let mut positional = InputField::ALL.iter();

        for arg in args {
            let named = arg
                .split_once('=')
                .and_then(|(key, value)| key.parse::<InputField>().ok().map(|f| (f, value)));
            match named {
                Some((field, value)) => inputs.set(field, value),
                None => {
                    if let Some(&field) = positional.next() {
                        inputs.set(field, arg);
                    }
                }
            }
        }

        inputs
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Budget => &self.budget,
            InputField::Clicks => &self.clicks,
            InputField::Impressions => &self.impressions,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InputField::Budget => self.budget = value,
            InputField::Clicks => self.clicks = value,
            InputField::Impressions => self.impressions = value,
        }
    }
}

/// Values the page starts with before the user types anything.
impl Default for RawInputs {
    fn default() -> Self {
        RawInputs::new(DEFAULT_BUDGET, DEFAULT_CLICKS, DEFAULT_IMPRESSIONS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Budget,
    Clicks,
    Impressions,
}

impl InputField {
    pub const ALL: [InputField; 3] = [InputField::Budget, InputField::Clicks, InputField::Impressions];

    pub fn key(self) -> &'static str {
        match self {
            InputField::Budget => "budget",
            InputField::Clicks => "clicks",
            InputField::Impressions => "impressions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::Budget => "Campaign Budget ($)",
            InputField::Clicks => "Total Clicks",
            InputField::Impressions => "Total Impressions",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            InputField::Budget => "Enter budget",
            InputField::Clicks => "Enter clicks",
            InputField::Impressions => "Enter impressions",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for InputField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(InputField::Budget),
            "clicks" => Ok(InputField::Clicks),
            "impressions" => Ok(InputField::Impressions),
            other => Err(format!("Unknown input field: {}", other)),
        }
    }
}

/// Derived metrics, each already formatted with two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub cpc: String,
    pub ctr: String,
    pub cpm: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Cpc,
    Ctr,
    Cpm,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Cpc, MetricKind::Ctr, MetricKind::Cpm];

    pub fn title(self) -> &'static str {
        match self {
            MetricKind::Cpc => "Cost Per Click (CPC)",
            MetricKind::Ctr => "Click-Through Rate (CTR)",
            MetricKind::Cpm => "Cost Per Mille (CPM)",
        }
    }

    /// CPC and CPM are currency, CTR is a percentage.
    pub fn decorate(self, value: &str) -> String {
        match self {
            MetricKind::Cpc | MetricKind::Cpm => format!("${}", value),
            MetricKind::Ctr => format!("{}%", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub kind: MetricKind,
    pub title: String,
    pub value: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFieldView {
    pub field: InputField,
    pub label: String,
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub inputs: RawInputs,
    pub metrics: Metrics,
    pub cards: Vec<MetricCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsSection {
    pub heading: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorPage {
    pub heading: String,
    pub subtitle: String,
    pub fields: Vec<InputFieldView>,
    pub cards: Vec<MetricCard>,
    pub tips: TipsSection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty_text() {
        let inputs: RawInputs = serde_json::from_str(r#"{"budget": "250"}"#).unwrap();
        assert_eq!(inputs, RawInputs::new("250", "", ""));
    }

    #[test]
    fn json_numbers_and_null_become_text() {
        let inputs: RawInputs =
            serde_json::from_str(r#"{"budget": 1000, "clicks": 12.5, "impressions": null}"#).unwrap();
        assert_eq!(inputs, RawInputs::new("1000", "12.5", ""));
    }

    #[test]
    fn from_args_fills_positionally() {
        let args = vec!["1000".to_string(), "100".to_string()];
        assert_eq!(RawInputs::from_args(args), RawInputs::new("1000", "100", ""));
        assert_eq!(RawInputs::from_args(Vec::new()), RawInputs::empty());
    }

    #[test]
    fn from_args_accepts_named_fields() {
        let args = vec![
            "impressions=5000".to_string(),
            "500".to_string(),
            "Clicks=0".to_string(),
        ];
        assert_eq!(RawInputs::from_args(args), RawInputs::new("500", "0", "5000"));
    }

    #[test]
    fn from_args_ignores_extra_positionals() {
        let args = ["1", "2", "3", "4"].iter().map(|s| s.to_string());
        assert_eq!(RawInputs::from_args(args), RawInputs::new("1", "2", "3"));
    }

    #[test]
    fn default_inputs_match_the_initial_page_state() {
        let inputs = RawInputs::default();
        assert_eq!(inputs.budget, "1000");
        assert_eq!(inputs.clicks, "100");
        assert_eq!(inputs.impressions, "10000");
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut inputs = RawInputs::default();
        inputs.set(InputField::Clicks, "7");
        assert_eq!(inputs.get(InputField::Clicks), "7");
        assert_eq!(inputs.get(InputField::Budget), "1000");
        assert_eq!(inputs.get(InputField::Impressions), "10000");
    }

    #[test]
    fn input_field_parses_case_insensitively() {
        assert_eq!("Budget".parse::<InputField>(), Ok(InputField::Budget));
        assert_eq!(" impressions ".parse::<InputField>(), Ok(InputField::Impressions));
        assert!("spend".parse::<InputField>().is_err());
    }

    #[test]
    fn decorate_adds_units() {
        assert_eq!(MetricKind::Cpc.decorate("10.00"), "$10.00");
        assert_eq!(MetricKind::Ctr.decorate("1.00"), "1.00%");
        assert_eq!(MetricKind::Cpm.decorate("100.00"), "$100.00");
    }

    #[test]
    fn metric_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MetricKind::Ctr).unwrap(), "\"ctr\"");
    }
}
