//! Chart and semantic colour configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Gradient stops sampled evenly to give each bar its own colour.
    pub bar_gradient_colors: &'static [&'static str],
    /// Fallback when the gradient cannot be built.
    pub default_bar_color: Color32,
    /// Bar width relative to the unit spacing between categories.
    pub bar_width_pct: f64,
    /// Height of each chart in points.
    pub chart_height: f32,
    /// Gallery thumbnails are scaled to this width.
    pub thumbnail_width: f32,

    // --- SEMANTIC COLORS ---
    pub color_success: Color32,
    pub color_failure: Color32,
    pub color_delta_up: Color32,

    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32, // Main values (white)
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32, // Explanations/Context (Darker Gray)

    // UI WIDGET STYLES
    pub color_widget_background: Color32,
    pub color_widget_border: Color32,
    pub color_footer_bg: Color32,
    pub color_footer_fg: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // Categorical palette, cool to warm
    bar_gradient_colors: &[
        "#636efa", // Blue
        "#00cc96", // Green
        "#ab63fa", // Purple
        "#ffa15a", // Orange
        "#ef553b", // Red
    ],
    default_bar_color: Color32::from_rgb(255, 165, 0),
    bar_width_pct: 0.7,
    chart_height: 260.0,
    thumbnail_width: 320.0,

    // SEMANTICS
    color_success: Color32::from_rgb(100, 255, 100),
    color_failure: Color32::from_rgb(255, 80, 80),
    color_delta_up: Color32::from_rgb(100, 255, 100),

    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
    color_warning: Color32::from_rgb(255, 215, 0), // Gold/Yellow

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    // UI WIDGETS
    color_widget_background: Color32::from_black_alpha(40),
    color_widget_border: Color32::from_gray(60),
    color_footer_bg: Color32::GRAY,
    color_footer_fg: Color32::WHITE,
};
