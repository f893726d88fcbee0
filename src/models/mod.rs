mod aggregate;
mod forecast;
mod kpi;
mod record;
mod view;

pub use {
    aggregate::AggregateSeries,
    forecast::ForecastPoint,
    kpi::{KpiTile, Kpis},
    record::Record,
    view::{DashboardBody, Degraded, Placeholder, View, ViewBody},
};
