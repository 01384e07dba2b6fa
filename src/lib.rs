pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::render::OutputFormat;
pub use app::runner::{execute, RunPlan};
pub use config::toml_config::ScriptConfig;
pub use crate::core::roster::Roster;
pub use crate::core::session::{Outcome, RunSummary, Session};
pub use domain::model::{Operation, Person, Student, StudentId};
pub use domain::ports::Describable;
pub use utils::error::{Result, RosterError};
