pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-roster")]
#[command(about = "A minimal in-memory student roster")]
pub struct CliConfig {
    #[arg(long, help = "TOML script of roster steps; runs the built-in demo when omitted")]
    pub script: Option<String>,

    #[arg(long, value_enum, help = "Output format (overrides the script setting)")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Also print the 'grade added' line for rejected grades")]
    pub legacy_grade_echo: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(script) = &self.script {
            validation::validate_path("script", script)?;
        }
        Ok(())
    }
}
