use crate::{
    actions::ActionId,
    data::GalleryEntry,
    domain::Section,
    params::{ParamName, ParamValue},
};

/// A single user interaction. Each one triggers exactly one full pass.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Initial render, or a repaint with nothing changed.
    Refresh,
    SetParam(ParamName, ParamValue),
    Fire(ActionId),
    Navigate(Section),
    Upload(Vec<GalleryEntry>),
    ClearUploads,
}

/// What the session did with an event before recomposing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    /// The edit was refused; the store is unchanged and the message belongs next to the control.
    Rejected(String),
}
