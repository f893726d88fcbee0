use chrono::NaiveDate;

/// Monotonic clock used for pass timing.
pub type AppInstant = std::time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn format_duration_micros(micros: u128) -> String {
    if micros < 1_000 {
        format!("{}us", micros)
    } else {
        format!("{:.2}ms", micros as f64 / 1000.0)
    }
}
