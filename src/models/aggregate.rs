use {
    crate::domain::Category,
    serde::{Deserialize, Serialize},
};

/// Market cap per category, one entry per category in enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSeries {
    entries: Vec<(Category, f64)>,
}

impl AggregateSeries {
    pub fn new(entries: Vec<(Category, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(Category, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
