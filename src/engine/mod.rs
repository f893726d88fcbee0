mod composer;
mod messages;
mod session;

pub use composer::{PassContext, ViewComposer};
pub use messages::{EventOutcome, UiEvent};
pub use session::{Interaction, Session};
