use crate::app::render::{JsonReporter, OutputFormat, TextReporter};
use crate::config::toml_config::ScriptConfig;
use crate::core::demo;
use crate::core::session::{RunSummary, Session};
use crate::domain::model::Operation;
use crate::domain::ports::SessionSettings;
use crate::utils::error::Result;
use std::io::Write;

/// Everything needed to run one roster session.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub operations: Vec<Operation>,
    pub format: OutputFormat,
    pub legacy_grade_echo: bool,
}

impl RunPlan {
    pub fn demo() -> Self {
        Self {
            operations: demo::operations(),
            format: OutputFormat::Text,
            legacy_grade_echo: false,
        }
    }

    pub fn from_script(script: ScriptConfig) -> Result<Self> {
        let format = match script.format() {
            Some(name) => OutputFormat::from_name(name)?,
            None => OutputFormat::default(),
        };
        let legacy_grade_echo = script.legacy_grade_echo();
        Ok(Self {
            operations: script.steps,
            format,
            legacy_grade_echo,
        })
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// The flag can only switch the legacy echo on.
    pub fn with_legacy_grade_echo(mut self, enabled: bool) -> Self {
        self.legacy_grade_echo |= enabled;
        self
    }
}

impl SessionSettings for RunPlan {
    fn legacy_grade_echo(&self) -> bool {
        self.legacy_grade_echo
    }
}

pub fn execute<W: Write>(plan: &RunPlan, out: W) -> Result<RunSummary> {
    tracing::debug!(
        "Executing plan: {} step(s), format {:?}, legacy echo {}",
        plan.operations.len(),
        plan.format,
        plan.legacy_grade_echo
    );

    let mut session = Session::new(plan);
    match plan.format {
        OutputFormat::Text => session.run(&plan.operations, &mut TextReporter::new(out)),
        OutputFormat::Json => session.run(&plan.operations, &mut JsonReporter::new(out)),
    }
}
