//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod dashboard;
mod debug;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use dashboard::{
    DASHBOARD, DashboardConfig, DateRangeConfig, MarketCapConfig, RecordConfig, ThresholdConfig,
};
pub use debug::{DF, LogFlags};
pub use plot::PLOT_CONFIG;

pub const LOG_PERFORMANCE: bool = DF.log_performance;
