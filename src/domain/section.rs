use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Navigation sections. Exactly one is active per session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    Default,
)]
pub enum Section {
    #[default]
    Dashboard,
    Settings,
    Contracts,
}

impl Section {
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "📊",
            Section::Settings => "⚙",
            Section::Contracts => "📄",
        }
    }
}
