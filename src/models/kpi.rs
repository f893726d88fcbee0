use {
    crate::{ui::UI_TEXT, utils::format_compact},
    serde::{Deserialize, Serialize},
};

/// Headline numbers for the three KPI tiles, with their deltas against the previous period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_sales: f64,
    pub total_sales_delta_pct: f64,
    pub total_orders: u64,
    pub total_orders_delta_pct: f64,
    /// Out of 5.
    pub satisfaction: f64,
    pub satisfaction_delta: f64,
}

/// A KPI as displayed: label, formatted value, formatted delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiTile {
    pub label: String,
    pub value: String,
    pub delta: String,
}

impl Kpis {
    pub fn tiles(&self) -> [KpiTile; 3] {
        [
            KpiTile {
                label: UI_TEXT.kpi_total_sales.to_string(),
                value: format!("${}", format_compact(self.total_sales)),
                delta: format!("{}%", self.total_sales_delta_pct),
            },
            KpiTile {
                label: UI_TEXT.kpi_total_orders.to_string(),
                value: format_compact(self.total_orders as f64),
                delta: format!("{}%", self.total_orders_delta_pct),
            },
            KpiTile {
                label: UI_TEXT.kpi_satisfaction.to_string(),
                value: format!("{:.1} / 5", self.satisfaction),
                delta: format!("{}", self.satisfaction_delta),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_render_dashboard_values() {
        let kpis = Kpis {
            total_sales: 1_200_000.0,
            total_sales_delta_pct: 15.0,
            total_orders: 8_300,
            total_orders_delta_pct: 12.0,
            satisfaction: 4.5,
            satisfaction_delta: 0.2,
        };
        let [sales, orders, csat] = kpis.tiles();
        assert_eq!(sales.label, "Total Sales");
        assert_eq!(sales.value, "$1.2M");
        assert_eq!(sales.delta, "15%");
        assert_eq!(orders.value, "8.3K");
        assert_eq!(orders.delta, "12%");
        assert_eq!(csat.label, "Customer Satisfaction");
        assert_eq!(csat.value, "4.5 / 5");
        assert_eq!(csat.delta, "0.2");
    }
}
