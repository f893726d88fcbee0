//! Dashboard defaults and synthesis bounds (Immutable Blueprints)

/// Bounds and default for the sales threshold slider.
pub struct ThresholdConfig {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// Default date range, stored as `(year, month, day)` so it can live in a const.
pub struct DateRangeConfig {
    pub start: (i32, u32, u32),
    pub end: (i32, u32, u32),
}

/// Shape of the synthesized sales table.
pub struct RecordConfig {
    pub count: usize,
    pub order_id_prefix: &'static str,
    pub order_id_width: usize,
    /// Half-open range, whole currency units.
    pub sales_range: (u32, u32),
}

/// Market cap per category is `millions * multiplier` with `millions` drawn from a half-open range.
pub struct MarketCapConfig {
    pub millions_range: (u32, u32),
    pub multiplier: f64,
}

pub struct DashboardConfig {
    pub threshold: ThresholdConfig,
    pub dates: DateRangeConfig,
    pub records: RecordConfig,
    pub market_cap: MarketCapConfig,
    /// Seed used when the user does not pass `--seed`.
    pub default_seed: u64,
    /// A pass slower than this is logged as slow.
    pub slow_pass_budget_micros: u128,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    threshold: ThresholdConfig {
        min: 0,
        max: 10_000,
        default: 5_000,
    },
    dates: DateRangeConfig {
        start: (2024, 1, 1),
        end: (2024, 12, 31),
    },
    records: RecordConfig {
        count: 5,
        order_id_prefix: "ORD-",
        order_id_width: 5,
        sales_range: (100, 1_000),
    },
    market_cap: MarketCapConfig {
        millions_range: (1, 100),
        multiplier: 1e6,
    },
    default_seed: 2024,
    slow_pass_budget_micros: 50_000,
};
