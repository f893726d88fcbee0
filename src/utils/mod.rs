mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::{format_compact, format_currency};
pub use time_utils::{AppInstant, TimeUtils, format_date, format_duration_micros};
