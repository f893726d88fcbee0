use crate::{
    actions::{ActionBoard, ActionId},
    config::{DASHBOARD, DF},
    data::{DerivedDataProvider, Forecaster, ImageGallery, PredictionStub, SeededProvider},
    domain::Section,
    errors::DashboardError,
    models::{DashboardBody, Degraded, Placeholder, View, ViewBody},
    params::{NavigationState, ParameterStore},
    ui::UI_TEXT,
};

/// Transient inputs of one pass that are not parameters.
pub struct PassContext<'a> {
    pub pass: u64,
    pub actions: &'a ActionBoard,
    pub gallery: &'a ImageGallery,
}

/// Builds the view for the active section. Holds no state between passes.
pub struct ViewComposer {
    provider: Box<dyn DerivedDataProvider>,
    forecaster: Box<dyn Forecaster>,
}

impl Default for ViewComposer {
    fn default() -> Self {
        Self::new(
            Box::new(SeededProvider::default()),
            Box::new(PredictionStub),
        )
    }
}

impl ViewComposer {
    pub fn new(provider: Box<dyn DerivedDataProvider>, forecaster: Box<dyn Forecaster>) -> Self {
        Self {
            provider,
            forecaster,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Box::new(SeededProvider::new(seed)), Box::new(PredictionStub))
    }

    pub fn compose(
        &self,
        nav: &NavigationState,
        params: &ParameterStore,
        ctx: &PassContext<'_>,
    ) -> View {
        let section = nav.section();
        let body = crate::trace_time!("compose", DASHBOARD.slow_pass_budget_micros, {
            match section {
                Section::Dashboard => match self.compose_dashboard(params, ctx) {
                    Ok(body) => ViewBody::Dashboard(Box::new(body)),
                    Err(err) => {
                        log::error!("Pass {} degraded: {}", ctx.pass, err);
                        ViewBody::Degraded(degraded(err))
                    }
                },
                Section::Settings => ViewBody::Placeholder(Placeholder {
                    heading: UI_TEXT.settings_heading.to_string(),
                    body: UI_TEXT.settings_body.to_string(),
                }),
                Section::Contracts => ViewBody::Placeholder(Placeholder {
                    heading: UI_TEXT.contracts_heading.to_string(),
                    body: UI_TEXT.contracts_body.to_string(),
                }),
            }
        });

        if DF.log_passes {
            log::info!(
                "Pass {} [{}] rev {} -> {}",
                ctx.pass,
                section,
                params.revision(),
                match &body {
                    ViewBody::Dashboard(_) => "dashboard",
                    ViewBody::Placeholder(_) => "placeholder",
                    ViewBody::Degraded(_) => "DEGRADED",
                }
            );
        }

        View {
            pass: ctx.pass,
            section,
            actions: ctx.actions.clone(),
            body,
            footer: UI_TEXT.footer,
        }
    }

    /// All artifacts or none: the first failure aborts the whole body.
    fn compose_dashboard(
        &self,
        params: &ParameterStore,
        ctx: &PassContext<'_>,
    ) -> Result<DashboardBody, DashboardError> {
        let kpis = self
            .provider
            .kpis(params)
            .map_err(|e| DashboardError::composition("KPIs", e))?;
        let records = self
            .provider
            .records(params)
            .map_err(|e| DashboardError::composition("sales table", e))?;
        let aggregate = self
            .provider
            .aggregate(params)
            .map_err(|e| DashboardError::composition("market cap chart", e))?;

        let forecast = if ctx.actions.succeeded(ActionId::MainSalesPrediction) {
            Some(
                self.forecaster
                    .predict()
                    .map_err(|e| DashboardError::composition("sales prediction", e))?,
            )
        } else {
            None
        };

        Ok(DashboardBody {
            kpis: kpis.tiles(),
            records,
            aggregate,
            forecast,
            gallery: ctx.gallery.list().to_vec(),
        })
    }
}

fn degraded(err: DashboardError) -> Degraded {
    match err {
        DashboardError::CompositionFailure { artifact, reason } => Degraded {
            artifact: artifact.to_string(),
            reason,
        },
        other => Degraded {
            artifact: "view".to_string(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actions::StubActionHandler,
        models::{AggregateSeries, ForecastPoint, Kpis, Record},
    };
    use anyhow::{Result, bail};

    struct BrokenRecords;

    impl DerivedDataProvider for BrokenRecords {
        fn records(&self, _params: &ParameterStore) -> Result<Vec<Record>> {
            bail!("warehouse offline")
        }
        fn kpis(&self, params: &ParameterStore) -> Result<Kpis> {
            SeededProvider::default().kpis(params)
        }
        fn aggregate(&self, params: &ParameterStore) -> Result<AggregateSeries> {
            SeededProvider::default().aggregate(params)
        }
    }

    fn ctx<'a>(actions: &'a ActionBoard, gallery: &'a ImageGallery) -> PassContext<'a> {
        PassContext {
            pass: 1,
            actions,
            gallery,
        }
    }

    struct NoForecast;

    impl Forecaster for NoForecast {
        fn predict(&self) -> Result<Vec<ForecastPoint>> {
            bail!("no model loaded")
        }
    }

    #[test]
    fn forecaster_failure_degrades_with_its_artifact() {
        let composer = ViewComposer::new(Box::new(SeededProvider::default()), Box::new(NoForecast));
        let gallery = ImageGallery::new();
        let mut actions = ActionBoard::new();

        let quiet = composer.compose(
            &NavigationState::default(),
            &ParameterStore::new(),
            &ctx(&actions, &gallery),
        );
        assert!(quiet.dashboard().is_some());

        actions.fire(&StubActionHandler, ActionId::MainSalesPrediction);
        let view = composer.compose(
            &NavigationState::default(),
            &ParameterStore::new(),
            &ctx(&actions, &gallery),
        );
        match view.body {
            ViewBody::Degraded(d) => {
                assert_eq!(d.artifact, "sales prediction");
                assert_eq!(d.reason, "no model loaded");
            }
            other => panic!("expected degraded view, got {:?}", other),
        }
    }

    #[test]
    fn dashboard_without_prediction_has_no_forecast() {
        let (actions, gallery) = (ActionBoard::new(), ImageGallery::new());
        let view = ViewComposer::default().compose(
            &NavigationState::default(),
            &ParameterStore::new(),
            &ctx(&actions, &gallery),
        );
        let body = view.dashboard().unwrap();
        assert_eq!(body.records.len(), 5);
        assert_eq!(body.aggregate.len(), 5);
        assert!(body.forecast.is_none());
        assert_eq!(view.footer, "© 2024 Made by Yoluko Solutions - Alexandre Kocev");
    }

    #[test]
    fn prediction_trigger_adds_forecast() {
        let mut actions = ActionBoard::new();
        actions.fire(&StubActionHandler, ActionId::MainSalesPrediction);
        let gallery = ImageGallery::new();
        let view = ViewComposer::default().compose(
            &NavigationState::default(),
            &ParameterStore::new(),
            &ctx(&actions, &gallery),
        );
        assert_eq!(view.dashboard().unwrap().forecast.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn static_sections_skip_the_provider() {
        let composer = ViewComposer::new(Box::new(BrokenRecords), Box::new(PredictionStub));
        let (actions, gallery) = (ActionBoard::new(), ImageGallery::new());
        let view = composer.compose(
            &NavigationState::new(Section::Settings),
            &ParameterStore::new(),
            &ctx(&actions, &gallery),
        );
        match view.body {
            ViewBody::Placeholder(p) => {
                assert_eq!(p.heading, "Settings");
                assert_eq!(p.body, "Settings page content goes here.");
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn provider_failure_degrades_instead_of_partial_view() {
        let composer = ViewComposer::new(Box::new(BrokenRecords), Box::new(PredictionStub));
        let (actions, gallery) = (ActionBoard::new(), ImageGallery::new());
        let view = composer.compose(
            &NavigationState::default(),
            &ParameterStore::new(),
            &ctx(&actions, &gallery),
        );
        match view.body {
            ViewBody::Degraded(d) => {
                assert_eq!(d.artifact, "sales table");
                assert_eq!(d.reason, "warehouse offline");
            }
            other => panic!("expected degraded view, got {:?}", other),
        }
    }
}
