use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level `config.toml` shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub holidays: HolidaySettings,
}

/// Holiday-calendar configuration: where the public feed lives, plus any
/// locally configured additional non-working dates (court closure days).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HolidaySettings {
    pub feed_url: String,
    pub non_working_days: Vec<NaiveDate>,
}

impl Default for HolidaySettings {
    fn default() -> Self {
        Self {
            feed_url: "https://www.gov.uk/bank-holidays.json".to_string(),
            non_working_days: Vec::new(),
        }
    }
}
