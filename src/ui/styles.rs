use {
    crate::{
        actions::{ActionResult, ActionStatus},
        config::PLOT_CONFIG,
        models::KpiTile,
        ui::{
            UI_CONFIG,
            ui_text::{ICON_CHECK, ICON_CROSS, ICON_UP},
        },
    },
    eframe::egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait StatusColor {
    fn color(&self) -> Color32;
    fn icon(&self) -> &'static str;
}

impl StatusColor for ActionStatus {
    fn color(&self) -> Color32 {
        match self {
            Self::Success => PLOT_CONFIG.color_success,
            Self::Failure => PLOT_CONFIG.color_failure,
            Self::None => PLOT_CONFIG.color_text_subdued,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Success => ICON_CHECK,
            Self::Failure => ICON_CROSS,
            Self::None => "",
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn section_heading(&mut self, text: impl Into<String>);
    fn kpi_tile(&mut self, tile: &KpiTile);
    /// Draws nothing for a `None` result.
    fn status_banner(&mut self, result: &ActionResult);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn section_heading(&mut self, text: impl Into<String>) {
        self.add_space(16.0);
        self.heading(RichText::new(text).strong().color(UI_CONFIG.colors.heading));
        self.add_space(6.0);
    }

    fn kpi_tile(&mut self, tile: &KpiTile) {
        UI_CONFIG.tile_frame().show(self, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label_subdued(&tile.label);
            ui.label(
                RichText::new(&tile.value)
                    .size(28.0)
                    .color(PLOT_CONFIG.color_text_primary),
            );
            ui.label(
                RichText::new(format!("{} {}", ICON_UP, tile.delta))
                    .small()
                    .color(PLOT_CONFIG.color_delta_up),
            );
        });
    }

    fn status_banner(&mut self, result: &ActionResult) {
        if !result.is_visible() {
            return;
        }
        let color = result.status.color();
        Frame {
            fill: color.linear_multiply(0.15),
            stroke: Stroke::new(1.0, color.linear_multiply(0.6)),
            inner_margin: Margin::symmetric(8, 6),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new(format!("{} {}", result.status.icon(), result.message)).color(color),
            );
        });
    }
}
