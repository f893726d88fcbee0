use {
    super::ActionId,
    anyhow::Result,
};

/// The operation behind a trigger. Returns the banner text on success.
///
/// Errors are turned into a `Failure` result by the board; they never propagate further.
pub trait ActionHandler {
    fn run(&self, id: ActionId) -> Result<String>;
}

/// Reports success for every trigger without doing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubActionHandler;

impl ActionHandler for StubActionHandler {
    fn run(&self, id: ActionId) -> Result<String> {
        Ok(id.success_message().to_string())
    }
}
