mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
pub(crate) mod ui_text;
mod utils;

pub use ui_config::{UI_CONFIG, UI_TEXT};
pub use ui_panels::ParamDrafts;
pub(crate) use utils::setup_custom_visuals;
