use {crate::models::ForecastPoint, anyhow::Result};

/// Seam for a forecasting model.
pub trait Forecaster {
    fn predict(&self) -> Result<Vec<ForecastPoint>>;
}

/// Fixed three-month forecast; ignores every parameter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PredictionStub;

const STUB_FORECAST: [(&str, u64); 3] = [("January", 50_000), ("February", 60_000), ("March", 55_000)];

impl Forecaster for PredictionStub {
    fn predict(&self) -> Result<Vec<ForecastPoint>> {
        Ok(STUB_FORECAST
            .iter()
            .map(|&(label, value)| ForecastPoint::new(label, value))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_forecast_is_fixed() {
        let points = PredictionStub.predict().unwrap();
        let pairs: Vec<_> = points
            .iter()
            .map(|p| (p.period_label.as_str(), p.predicted_value))
            .collect();
        assert_eq!(pairs, [("January", 50_000), ("February", 60_000), ("March", 55_000)]);
    }
}
