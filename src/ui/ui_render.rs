use eframe::egui::{
    CentralPanel, Context, Frame, Grid, Image, Margin, RichText, ScrollArea, SidePanel, Stroke,
    TopBottomPanel, Ui, load::Bytes,
};
use strum::IntoEnumIterator;

use crate::actions::{ActionBoard, ActionId, Placement};
use crate::app::App;
use crate::config::PLOT_CONFIG;
use crate::data::GalleryEntry;
use crate::engine::UiEvent;
use crate::models::{AggregateSeries, DashboardBody, Degraded, ForecastPoint, Placeholder, Record, ViewBody};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{NavigationPanel, Panel, ParametersPanel, SidebarActionsPanel};
use crate::ui::ui_plot_view::CategoryBarChart;
use crate::ui::ui_text::{ICON_CROSS, ICON_IMAGE};
use crate::ui::utils::{render_fullscreen_message, spaced_separator};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{format_compact, format_currency, format_date};

impl App {
    pub(crate) fn render_left_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.side_panel_frame();

        SidePanel::left("left_panel")
            .exact_width(UI_CONFIG.side_panel_width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                let mut events = Vec::new();
                let view = self.session.view();

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .id_salt("left_panel_scroll")
                    .show(ui, |ui| {
                        events.extend(NavigationPanel::new(view.section).render(ui));
                        spaced_separator(ui);

                        let inverted = self.session.params().has_inverted_dates();
                        events.extend(ParametersPanel::new(&mut self.drafts, inverted).render(ui));

                        if let Some(notice) = &self.notice {
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new(format!("{} {}", ICON_CROSS, notice))
                                    .small()
                                    .color(PLOT_CONFIG.color_failure),
                            );
                        }
                        spaced_separator(ui);

                        events.extend(SidebarActionsPanel::new(&view.actions).render(ui));
                    });

                self.pending.extend(events);
            });
    }

    pub(crate) fn render_footer_panel(&mut self, ctx: &Context) {
        let footer = self.session.view().footer;
        TopBottomPanel::bottom("footer_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .exact_height(UI_CONFIG.footer_height)
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(footer).color(PLOT_CONFIG.color_footer_fg));
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                let mut events = Vec::new();
                let view = self.session.view();

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .id_salt("central_scroll")
                    .show(ui, |ui| match &view.body {
                        ViewBody::Dashboard(body) => {
                            render_dashboard(ui, body, &view.actions, &mut events)
                        }
                        ViewBody::Placeholder(page) => render_placeholder(ui, page),
                        ViewBody::Degraded(failure) => render_degraded(ui, failure),
                    });

                self.pending.extend(events);
            });
    }
}

fn render_dashboard(
    ui: &mut Ui,
    body: &DashboardBody,
    actions: &ActionBoard,
    events: &mut Vec<UiEvent>,
) {
    ui.heading(RichText::new(UI_TEXT.page_title).size(30.0).strong());
    ui.add_space(12.0);

    ui.columns(body.kpis.len(), |cols| {
        for (col, tile) in cols.iter_mut().zip(body.kpis.iter()) {
            col.kpi_tile(tile);
        }
    });

    ui.add_space(12.0);
    render_main_actions(ui, actions, events);

    ui.section_heading(UI_TEXT.table_heading);
    render_sales_table(ui, &body.records);

    ui.section_heading(UI_TEXT.market_cap_heading);
    render_market_caps(ui, &body.aggregate);

    render_prediction(ui, body.forecast.as_deref(), actions, events);

    render_gallery(ui, &body.gallery, events);
}

fn render_main_actions(ui: &mut Ui, actions: &ActionBoard, events: &mut Vec<UiEvent>) {
    let ids: Vec<ActionId> = ActionId::iter()
        .filter(|id| id.placement() == Placement::Dashboard)
        .filter(|id| *id != ActionId::MainSalesPrediction)
        .collect();

    ui.columns(ids.len(), |cols| {
        for (col, id) in cols.iter_mut().zip(ids) {
            if col.button(id.label()).clicked() {
                events.push(UiEvent::Fire(id));
            }
            col.status_banner(&actions.result_for(id));
        }
    });
}

fn render_sales_table(ui: &mut Ui, records: &[Record]) {
    Grid::new("sales_table")
        .striped(true)
        .num_columns(5)
        .min_col_width(100.0)
        .show(ui, |ui| {
            for header in [
                UI_TEXT.col_order_id,
                UI_TEXT.col_product,
                UI_TEXT.col_category,
                UI_TEXT.col_order_date,
                UI_TEXT.col_sales,
            ] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for record in records {
                ui.label(&record.order_id);
                ui.label(&record.product);
                ui.label(record.category.to_string());
                ui.label(format_date(record.order_date));
                ui.label(format_currency(record.sales_amount as f64));
                ui.end_row();
            }
        });
}

fn render_market_caps(ui: &mut Ui, aggregate: &AggregateSeries) {
    let (labels, values): (Vec<String>, Vec<f64>) = aggregate
        .entries()
        .iter()
        .map(|(category, value)| (category.to_string(), *value))
        .unzip();

    CategoryBarChart::new("market_cap_chart", labels, values)
        .axes(UI_TEXT.market_cap_x_axis, UI_TEXT.market_cap_y_axis)
        .value_format(|v| format!("${}", format_compact(v)))
        .show(ui);
}

fn render_prediction(
    ui: &mut Ui,
    forecast: Option<&[ForecastPoint]>,
    actions: &ActionBoard,
    events: &mut Vec<UiEvent>,
) {
    ui.section_heading(UI_TEXT.prediction_heading);
    let id = ActionId::MainSalesPrediction;
    if ui.button(id.label()).clicked() {
        events.push(UiEvent::Fire(id));
    }

    let Some(points) = forecast else {
        // A failed run still reports itself.
        ui.status_banner(&actions.result_for(id));
        return;
    };

    ui.label_subdued(UI_TEXT.prediction_running);
    ui.status_banner(&actions.result_for(id));
    ui.add_space(6.0);
    ui.label_subheader(UI_TEXT.prediction_title);

    let (labels, values): (Vec<String>, Vec<f64>) = points
        .iter()
        .map(|p| (p.period_label.clone(), p.predicted_value as f64))
        .unzip();

    CategoryBarChart::new("prediction_chart", labels, values)
        .axes(UI_TEXT.prediction_x_axis, UI_TEXT.prediction_y_axis)
        .value_format(format_currency)
        .show_values(true)
        .show(ui);
}

fn render_gallery(ui: &mut Ui, entries: &[GalleryEntry], events: &mut Vec<UiEvent>) {
    ui.section_heading(UI_TEXT.gallery_heading);
    ui.label_subdued(UI_TEXT.gallery_hint);

    Frame {
        stroke: Stroke::new(1.0, PLOT_CONFIG.color_info),
        inner_margin: Margin::same(16),
        ..Default::default()
    }
    .show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{} {}", ICON_IMAGE, UI_TEXT.gallery_drop_zone))
                    .color(PLOT_CONFIG.color_info),
            );
        });
    });

    if entries.is_empty() {
        return;
    }

    if ui.button(UI_TEXT.gallery_clear).clicked() {
        events.push(UiEvent::ClearUploads);
    }
    ui.add_space(8.0);

    for (i, entry) in entries.iter().enumerate() {
        ui.add(
            Image::from_bytes(
                format!("bytes://gallery/{}/{}", i, entry.name),
                Bytes::Shared(entry.blob.clone()),
            )
            .max_width(PLOT_CONFIG.thumbnail_width),
        );
        ui.label_subdued(entry.caption());
        ui.add_space(8.0);
    }
}

fn render_placeholder(ui: &mut Ui, page: &Placeholder) {
    ui.heading(RichText::new(&page.heading).size(30.0).strong());
    ui.add_space(8.0);
    ui.label(&page.body);
}

fn render_degraded(ui: &mut Ui, failure: &Degraded) {
    let body = format!(
        "{}: {}\n\n{}",
        failure.artifact, failure.reason, UI_TEXT.degraded_hint
    );
    render_fullscreen_message(ui, UI_TEXT.degraded_title, &body, true);
}
