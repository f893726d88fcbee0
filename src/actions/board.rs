use {
    super::{ActionHandler, ActionId, ActionResult},
    crate::config::DF,
    serde::Serialize,
    std::collections::BTreeMap,
};

/// `{action_id -> result}` for the current pass only.
///
/// Cleared by [`ActionBoard::begin_pass`]; only triggers fired after that call appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionBoard {
    results: BTreeMap<ActionId, ActionResult>,
}

impl ActionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_pass(&mut self) {
        self.results.clear();
    }

    /// Runs the handler and records the outcome. Never fails.
    pub fn fire(&mut self, handler: &dyn ActionHandler, id: ActionId) -> ActionResult {
        let result = match handler.run(id) {
            Ok(message) => ActionResult::success(id, message),
            Err(err) => ActionResult::failure(id, format!("{:#}", err)),
        };
        if DF.log_actions {
            log::info!("Action {} -> {}: {}", id, result.status, result.message);
        }
        self.results.insert(id, result.clone());
        result
    }

    /// Records a failure without consulting any handler.
    pub fn reject(&mut self, id: ActionId, message: impl Into<String>) -> ActionResult {
        let result = ActionResult::failure(id, message);
        if DF.log_actions {
            log::warn!("Action {} rejected: {}", id, result.message);
        }
        self.results.insert(id, result.clone());
        result
    }

    pub fn result_for(&self, id: ActionId) -> ActionResult {
        self.results
            .get(&id)
            .cloned()
            .unwrap_or_else(|| ActionResult::none(id))
    }

    /// True only for a successful fire in this pass.
    pub fn succeeded(&self, id: ActionId) -> bool {
        self.results
            .get(&id)
            .is_some_and(|r| r.status == super::ActionStatus::Success)
    }

    pub fn visible(&self) -> impl Iterator<Item = &ActionResult> {
        self.results.values().filter(|r| r.is_visible())
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
