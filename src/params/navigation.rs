use crate::domain::Section;

/// Which section is on screen. Owned by the session, never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    section: Section,
}

impl NavigationState {
    pub fn new(section: Section) -> Self {
        Self { section }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns true when the section actually changed.
    pub fn switch_to(&mut self, section: Section) -> bool {
        if self.section == section {
            return false;
        }
        self.section = section;
        true
    }
}
