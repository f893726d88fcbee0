use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub period_label: String,
    pub predicted_value: u64,
}

impl ForecastPoint {
    pub fn new(period_label: impl Into<String>, predicted_value: u64) -> Self {
        Self {
            period_label: period_label.into(),
            predicted_value,
        }
    }
}
