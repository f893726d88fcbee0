use {
    eframe::{
        Frame,
        egui::{Context, DroppedFile},
    },
    std::{fs, mem, path::Path, sync::Arc},
};

use crate::{
    Cli,
    config::{DASHBOARD, DF},
    data::GalleryEntry,
    engine::{EventOutcome, Session, UiEvent},
    ui::{ParamDrafts, setup_custom_visuals},
};

/// Desktop shell around a single [`Session`]. Widgets queue events during a frame;
/// the queue is drained once per frame, one pass per event.
pub struct App {
    pub(crate) session: Session,
    pub(crate) drafts: ParamDrafts,
    pub(crate) pending: Vec<UiEvent>,
    /// Last rejected edit, shown under the parameter controls until the next accepted one.
    pub(crate) notice: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::from_session(Session::default())
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let seed = args.seed.unwrap_or(DASHBOARD.default_seed);
        if DF.log_passes {
            log::info!("Starting dashboard session with seed {}", seed);
        }
        Self::from_session(Session::with_seed(seed))
    }

    fn from_session(session: Session) -> Self {
        let drafts = ParamDrafts::from_store(session.params());
        Self {
            session,
            drafts,
            pending: Vec::new(),
            notice: None,
        }
    }

    /// Turns files dropped on the window into one upload event.
    fn collect_dropped_files(&mut self, ctx: &Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let entries: Vec<GalleryEntry> = dropped.iter().filter_map(read_dropped_file).collect();
        if !entries.is_empty() {
            self.pending.push(UiEvent::Upload(entries));
        }
    }

    fn process_pending(&mut self, ctx: &Context) {
        if self.pending.is_empty() {
            return;
        }

        for event in mem::take(&mut self.pending) {
            if matches!(event, UiEvent::ClearUploads) {
                // Thumbnails are cached by uri; a new upload may reuse an old one.
                ctx.forget_all_images();
            }
            let interaction = self.session.handle(event);
            match interaction.outcome {
                EventOutcome::Applied => self.notice = None,
                EventOutcome::Rejected(reason) => {
                    log::warn!("Parameter edit rejected: {}", reason);
                    self.notice = Some(reason);
                }
            }
        }

        // Rejected edits snap the widgets back to the stored values.
        self.drafts = ParamDrafts::from_store(self.session.params());
        ctx.request_repaint();
    }
}

fn read_dropped_file(file: &DroppedFile) -> Option<GalleryEntry> {
    let name = if file.name.is_empty() {
        file.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        file.name.clone()
    };

    let bytes: Arc<[u8]> = match (&file.bytes, &file.path) {
        (Some(bytes), _) => bytes.clone(),
        (None, Some(path)) => match fs::read(path) {
            Ok(bytes) => bytes.into(),
            Err(err) => {
                log::error!("Failed to read dropped file {}: {}", path.display(), err);
                return None;
            }
        },
        (None, None) => {
            log::warn!("Dropped file {} carried no data", name);
            return None;
        }
    };

    Some(GalleryEntry::new(name, bytes))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        self.render_left_panel(ctx);
        self.render_footer_panel(ctx);
        self.render_central_panel(ctx);

        self.collect_dropped_files(ctx);
        self.process_pending(ctx);
    }
}
