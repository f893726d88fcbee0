// Core modules
pub mod actions;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod models;
pub mod params;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the report binary and tests)
pub use actions::{ActionId, ActionResult, ActionStatus};
pub use app::App;
pub use domain::{Category, Region, Section};
pub use engine::{EventOutcome, Interaction, Session, UiEvent, ViewComposer};
pub use errors::DashboardError;
pub use models::{View, ViewBody};
pub use params::{ParamName, ParamValue, ParameterStore};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the synthesized sales data. The same seed and filters always give the same data.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
