use crate::params::ParamName;

/// Errors surfaced by the dashboard core.
///
/// Parameter errors are returned from [`crate::params::ParameterStore::set`] before
/// anything is mutated. `CompositionFailure` never escapes a pass: the composer
/// turns it into a degraded view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("invalid value {value:?} for parameter {name}: {reason}")]
    InvalidParameter {
        name: ParamName,
        value: String,
        reason: String,
    },
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: ParamName,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("could not produce {artifact}: {reason}")]
    CompositionFailure {
        artifact: &'static str,
        reason: String,
    },
}

impl DashboardError {
    pub(crate) fn composition(artifact: &'static str, err: anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line
        Self::CompositionFailure {
            artifact,
            reason: format!("{:#}", err),
        }
    }
}
