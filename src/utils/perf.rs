#[macro_export]
macro_rules! trace_time {
    // $threshold_micros: Enter 500 for 0.5ms, 1000 for 1ms, etc.
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        if $crate::config::LOG_PERFORMANCE {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            let micros = start.elapsed().as_micros();
            if micros > $threshold_micros {
                log::warn!(
                    "🐢 SLOW '{}' took {} (budget {})",
                    $name,
                    $crate::utils::format_duration_micros(micros),
                    $crate::utils::format_duration_micros($threshold_micros)
                );
            }
            result
        } else {
            $block
        }
    }};
}
