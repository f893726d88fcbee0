//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// One line per recomputation pass (section, pass number, outcome).
    pub log_passes: bool,

    /// Trigger fires and their results.
    pub log_actions: bool,

    /// Parameter edits, accepted and rejected.
    pub log_params: bool,

    pub log_gallery: bool,

    /// Activate trace_time macro and slow-pass warnings
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_passes: false,
    log_actions: true,
    log_params: true,
    log_gallery: true,
    log_performance: true,
};
