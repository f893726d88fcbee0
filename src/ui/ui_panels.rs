use chrono::NaiveDate;
use eframe::egui::{ComboBox, RichText, Slider, Ui};
use egui_extras::DatePickerButton;
use strum::IntoEnumIterator;

use crate::actions::{ActionBoard, ActionId, Placement};
use crate::config::{DASHBOARD, PLOT_CONFIG};
use crate::domain::{Category, Region, Section};
use crate::engine::UiEvent;
use crate::params::{ParamName, ParamValue, ParameterStore};
use crate::ui::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::ICON_WARNING;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Widget-side copies of the parameters. Widgets edit these in place; the store only
/// changes once the resulting event has been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDrafts {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
    pub region: Region,
    pub threshold: u32,
}

impl ParamDrafts {
    pub fn from_store(params: &ParameterStore) -> Self {
        Self {
            start_date: params.start_date(),
            end_date: params.end_date(),
            category: params.category(),
            region: params.region(),
            threshold: params.threshold(),
        }
    }
}

impl Default for ParamDrafts {
    fn default() -> Self {
        Self::from_store(&ParameterStore::default())
    }
}

/// Section switcher at the top of the sidebar.
pub struct NavigationPanel {
    selected: Section,
}

impl NavigationPanel {
    pub fn new(selected: Section) -> Self {
        Self { selected }
    }
}

impl Panel for NavigationPanel {
    type Event = UiEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.section_heading(UI_TEXT.lp_navigation);

        for section in Section::iter() {
            let text = format!("{} {}", section.icon(), section);
            if ui.radio_value(&mut self.selected, section, text).clicked() {
                events.push(UiEvent::Navigate(section));
            }
        }
        events
    }
}

/// Date, category, region and threshold controls.
pub struct ParametersPanel<'a> {
    drafts: &'a mut ParamDrafts,
    inverted_dates: bool,
}

impl<'a> ParametersPanel<'a> {
    pub fn new(drafts: &'a mut ParamDrafts, inverted_dates: bool) -> Self {
        Self {
            drafts,
            inverted_dates,
        }
    }

    fn render_dates(&mut self, ui: &mut Ui, events: &mut Vec<UiEvent>) {
        ui.label_subheader(UI_TEXT.param_start_date);
        if ui
            .add(DatePickerButton::new(&mut self.drafts.start_date).id_salt("start_date"))
            .changed()
        {
            events.push(UiEvent::SetParam(
                ParamName::StartDate,
                ParamValue::Date(self.drafts.start_date),
            ));
        }

        ui.label_subheader(UI_TEXT.param_end_date);
        if ui
            .add(DatePickerButton::new(&mut self.drafts.end_date).id_salt("end_date"))
            .changed()
        {
            events.push(UiEvent::SetParam(
                ParamName::EndDate,
                ParamValue::Date(self.drafts.end_date),
            ));
        }

        if self.inverted_dates {
            ui.label(
                RichText::new(format!("{} {}", ICON_WARNING, UI_TEXT.warn_inverted_dates))
                    .small()
                    .color(PLOT_CONFIG.color_warning),
            );
        }
    }

    fn render_choices(&mut self, ui: &mut Ui, events: &mut Vec<UiEvent>) {
        ui.label_subheader(UI_TEXT.param_category);
        ComboBox::from_id_salt("category")
            .selected_text(self.drafts.category.to_string())
            .show_ui(ui, |ui| {
                for category in Category::iter() {
                    if ui
                        .selectable_value(&mut self.drafts.category, category, category.to_string())
                        .clicked()
                    {
                        events.push(UiEvent::SetParam(
                            ParamName::Category,
                            ParamValue::Choice(category.to_string()),
                        ));
                    }
                }
            });

        ui.label_subheader(UI_TEXT.param_region);
        ComboBox::from_id_salt("region")
            .selected_text(self.drafts.region.to_string())
            .show_ui(ui, |ui| {
                for region in Region::iter() {
                    if ui
                        .selectable_value(&mut self.drafts.region, region, region.to_string())
                        .clicked()
                    {
                        events.push(UiEvent::SetParam(
                            ParamName::Region,
                            ParamValue::Choice(region.to_string()),
                        ));
                    }
                }
            });
    }

    fn render_threshold(&mut self, ui: &mut Ui, events: &mut Vec<UiEvent>) {
        ui.label_subheader(UI_TEXT.param_threshold);
        let bounds = DASHBOARD.threshold.min..=DASHBOARD.threshold.max;
        let response = ui.add(Slider::new(&mut self.drafts.threshold, bounds).step_by(1.0));

        // Dragging only commits on release; keyboard and text edits commit immediately.
        if response.drag_stopped() || (response.changed() && !response.dragged()) {
            events.push(UiEvent::SetParam(
                ParamName::Threshold,
                ParamValue::Number(self.drafts.threshold as i64),
            ));
        }
    }
}

impl<'a> Panel for ParametersPanel<'a> {
    type Event = UiEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.section_heading(UI_TEXT.lp_parameters);

        self.render_dates(ui, &mut events);
        ui.add_space(6.0);
        self.render_choices(ui, &mut events);
        ui.add_space(6.0);
        self.render_threshold(ui, &mut events);

        events
    }
}

/// Buttons that live in the sidebar whatever section is active.
pub struct SidebarActionsPanel<'a> {
    actions: &'a ActionBoard,
}

impl<'a> SidebarActionsPanel<'a> {
    pub fn new(actions: &'a ActionBoard) -> Self {
        Self { actions }
    }
}

impl<'a> Panel for SidebarActionsPanel<'a> {
    type Event = UiEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.section_heading(UI_TEXT.lp_actions);

        for id in ActionId::iter().filter(|id| id.placement() == Placement::Sidebar) {
            if ui.button(id.label()).clicked() {
                events.push(UiEvent::Fire(id));
            }
            ui.status_banner(&self.actions.result_for(id));
            ui.add_space(4.0);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_mirror_the_store() {
        let mut store = ParameterStore::default();
        store
            .set(ParamName::Region, ParamValue::Choice("Asia".into()))
            .unwrap();
        let drafts = ParamDrafts::from_store(&store);
        assert_eq!(drafts.region, Region::Asia);
        assert_eq!(drafts.threshold, 5000);
        assert_eq!(drafts.category, Category::Electronics);
    }
}
