use {
    super::{
        composer::{PassContext, ViewComposer},
        messages::{EventOutcome, UiEvent},
    },
    crate::{
        actions::{ActionBoard, ActionHandler, ActionId, Placement, StubActionHandler},
        config::DF,
        data::{GalleryEntry, ImageGallery},
        domain::Section,
        models::View,
        params::{NavigationState, ParamName, ParamValue, ParameterStore},
        ui::UI_TEXT,
    },
};

/// Result of feeding one event to the session.
#[derive(Debug, Clone)]
pub struct Interaction {
    pub outcome: EventOutcome,
    pub view: View,
}

/// One viewer's dashboard. Owns all mutable state; nothing is shared between sessions.
///
/// Every event runs exactly one full pass: the action board is cleared, the event is
/// applied, and the active section is recomposed from scratch.
pub struct Session {
    params: ParameterStore,
    nav: NavigationState,
    gallery: ImageGallery,
    actions: ActionBoard,
    handler: Box<dyn ActionHandler>,
    composer: ViewComposer,
    pass: u64,
    view: View,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ViewComposer::default(), Box::new(StubActionHandler))
    }
}

impl Session {
    pub fn new(composer: ViewComposer, handler: Box<dyn ActionHandler>) -> Self {
        let params = ParameterStore::new();
        let nav = NavigationState::default();
        let gallery = ImageGallery::new();
        let actions = ActionBoard::new();
        let view = composer.compose(
            &nav,
            &params,
            &PassContext {
                pass: 0,
                actions: &actions,
                gallery: &gallery,
            },
        );
        Self {
            params,
            nav,
            gallery,
            actions,
            handler,
            composer,
            pass: 0,
            view,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(ViewComposer::with_seed(seed), Box::new(StubActionHandler))
    }

    pub fn handle(&mut self, event: UiEvent) -> Interaction {
        self.pass += 1;
        self.actions.begin_pass();

        let outcome = self.apply(event);

        self.view = self.composer.compose(
            &self.nav,
            &self.params,
            &PassContext {
                pass: self.pass,
                actions: &self.actions,
                gallery: &self.gallery,
            },
        );

        Interaction {
            outcome,
            view: self.view.clone(),
        }
    }

    fn apply(&mut self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::Refresh => EventOutcome::Applied,
            UiEvent::SetParam(name, value) => match self.params.set(name, value) {
                Ok(()) => EventOutcome::Applied,
                Err(err) => EventOutcome::Rejected(err.to_string()),
            },
            UiEvent::Fire(id) => {
                if id.placement() == Placement::Dashboard && self.nav.section() != Section::Dashboard {
                    self.actions.reject(
                        id,
                        format!("{} {}", id.label(), UI_TEXT.action_unavailable_suffix),
                    );
                } else {
                    self.actions.fire(self.handler.as_ref(), id);
                }
                EventOutcome::Applied
            }
            UiEvent::Navigate(section) => {
                if self.nav.switch_to(section) && DF.log_passes {
                    log::info!("Navigated to {}", section);
                }
                EventOutcome::Applied
            }
            UiEvent::Upload(files) => {
                self.gallery.accept(files);
                EventOutcome::Applied
            }
            UiEvent::ClearUploads => {
                self.gallery.clear();
                EventOutcome::Applied
            }
        }
    }

    pub fn set_param(&mut self, name: ParamName, value: ParamValue) -> Interaction {
        self.handle(UiEvent::SetParam(name, value))
    }

    pub fn fire(&mut self, id: ActionId) -> Interaction {
        self.handle(UiEvent::Fire(id))
    }

    pub fn navigate(&mut self, section: Section) -> Interaction {
        self.handle(UiEvent::Navigate(section))
    }

    pub fn upload(&mut self, files: Vec<GalleryEntry>) -> Interaction {
        self.handle(UiEvent::Upload(files))
    }

    /// The view produced by the most recent pass.
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    pub fn section(&self) -> Section {
        self.nav.section()
    }

    pub fn pass(&self) -> u64 {
        self.pass
    }
}
