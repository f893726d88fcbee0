use {
    super::{AggregateSeries, ForecastPoint, KpiTile, Record},
    crate::{actions::ActionBoard, data::GalleryEntry, domain::Section},
    serde::Serialize,
};

/// Everything the UI needs to draw one pass. Rebuilt from scratch every time.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub pass: u64,
    pub section: Section,
    /// Results of triggers fired in this pass.
    pub actions: ActionBoard,
    pub body: ViewBody,
    pub footer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewBody {
    Dashboard(Box<DashboardBody>),
    Placeholder(Placeholder),
    Degraded(Degraded),
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardBody {
    pub kpis: [KpiTile; 3],
    pub records: Vec<Record>,
    pub aggregate: AggregateSeries,
    /// Present only on a pass where the prediction trigger succeeded.
    pub forecast: Option<Vec<ForecastPoint>>,
    pub gallery: Vec<GalleryEntry>,
}

/// Static page for sections with no derived content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub heading: String,
    pub body: String,
}

/// Shown instead of any partial artifact when derivation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Degraded {
    pub artifact: String,
    pub reason: String,
}

impl View {
    pub fn dashboard(&self) -> Option<&DashboardBody> {
        match &self.body {
            ViewBody::Dashboard(body) => Some(body),
            _ => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.body, ViewBody::Degraded(_))
    }
}
