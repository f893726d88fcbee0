use colorgrad::Gradient;
use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Axis, AxisHints, Bar, BarChart, GridMark, Plot, PlotPoint, Text};

use crate::config::PLOT_CONFIG;

/// A categorical bar chart: one bar per label, each in its own colour.
pub(crate) struct CategoryBarChart<'a> {
    id: &'a str,
    labels: Vec<String>,
    values: Vec<f64>,
    x_axis: &'a str,
    y_axis: &'a str,
    value_format: fn(f64) -> String,
    show_values: bool,
}

impl<'a> CategoryBarChart<'a> {
    pub(crate) fn new(id: &'a str, labels: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(labels.len(), values.len());
        Self {
            id,
            labels,
            values,
            x_axis: "",
            y_axis: "",
            value_format: |v| format!("{}", v),
            show_values: false,
        }
    }

    pub(crate) fn axes(mut self, x_axis: &'a str, y_axis: &'a str) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    pub(crate) fn value_format(mut self, f: fn(f64) -> String) -> Self {
        self.value_format = f;
        self
    }

    /// Print each value above its bar.
    pub(crate) fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    pub(crate) fn show(self, ui: &mut Ui) {
        let colors = bar_colors(self.values.len());
        let fmt = self.value_format;

        let bars: Vec<Bar> = self
            .values
            .iter()
            .zip(&self.labels)
            .zip(&colors)
            .enumerate()
            .map(|(i, ((value, label), color))| {
                Bar::new(i as f64, *value)
                    .name(label)
                    .fill(*color)
                    .width(PLOT_CONFIG.bar_width_pct)
            })
            .collect();

        let labels = self.labels.clone();
        let x_axis = AxisHints::new(Axis::X)
            .label(self.x_axis)
            .formatter(move |mark, _range| category_label(&labels, mark.value));
        let y_axis = AxisHints::new(Axis::Y)
            .label(self.y_axis)
            .formatter(move |mark, _range| fmt(mark.value));

        let count = self.values.len();
        let text_values: Vec<(f64, f64)> = if self.show_values {
            self.values.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect()
        } else {
            Vec::new()
        };

        Plot::new(self.id)
            .height(PLOT_CONFIG.chart_height)
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .x_grid_spacer(move |_input| {
                (0..count)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .include_x(-0.5)
            .include_x(count as f64 - 0.5)
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(self.id, bars));
                for (x, y) in text_values {
                    plot_ui.text(
                        Text::new(
                            "",
                            PlotPoint::new(x, y),
                            RichText::new(fmt(y)).color(PLOT_CONFIG.color_text_primary),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}

/// Label for a grid mark, blank between categories.
fn category_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > f64::EPSILON || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// `n` colours sampled evenly along the configured gradient.
pub(crate) fn bar_colors(n: usize) -> Vec<Color32> {
    let grad = match colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.bar_gradient_colors)
        .build::<colorgrad::LinearGradient>()
    {
        Ok(g) => g,
        Err(err) => {
            log::warn!("Bar gradient unavailable, using flat colour: {}", err);
            return vec![PLOT_CONFIG.default_bar_color; n];
        }
    };
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            to_egui_color(grad.at(t))
        })
        .collect()
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_distinct_colour_per_bar() {
        let colors = bar_colors(5);
        assert_eq!(colors.len(), 5);
        assert_ne!(colors[0], colors[4]);
        assert_eq!(bar_colors(1).len(), 1);
        assert!(bar_colors(0).is_empty());
    }

    #[test]
    fn axis_labels_only_on_whole_indices() {
        let labels = vec!["January".to_string(), "February".to_string()];
        assert_eq!(category_label(&labels, 0.0), "January");
        assert_eq!(category_label(&labels, 1.0), "February");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
