//! One-shot triggers and the results they leave on screen for a single pass.

mod board;
mod handler;
mod trigger;

pub use board::ActionBoard;
pub use handler::{ActionHandler, StubActionHandler};
pub use trigger::{ActionId, ActionResult, ActionStatus, Placement};
