use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub tile_background: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    pub footer_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(14, 17, 23),
        side_panel: Color32::from_rgb(38, 39, 48),
        tile_background: Color32::from_rgb(28, 31, 40),
    },
    side_panel_width: 260.0,
    footer_height: 50.0,
};

impl UiConfig {
    /// Frame for the sidebar (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the fixed footer
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: crate::config::PLOT_CONFIG.color_footer_bg,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4), // Tighter vertically
            ..Default::default()
        }
    }

    /// Frame for the main content
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 12),
            ..Default::default()
        }
    }

    /// Frame around a single KPI tile
    pub fn tile_frame(&self) -> Frame {
        Frame {
            fill: self.colors.tile_background,
            stroke: Stroke::new(1.0, crate::config::PLOT_CONFIG.color_widget_border),
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
