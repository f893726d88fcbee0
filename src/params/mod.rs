//! Session-scoped parameter state: filter controls and navigation.

mod navigation;
mod store;

pub use navigation::NavigationState;
pub use store::{ParamKind, ParamName, ParamValue, ParameterStore};
