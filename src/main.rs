use anyhow::Context;
use clap::Parser;
use small_roster::utils::error::ErrorSeverity;
use small_roster::utils::{logger, validation::Validate};
use small_roster::{execute, CliConfig, OutputFormat, RosterError, RunPlan, ScriptConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        Some(OutputFormat::Json) => logger::init_json_logger(config.verbose),
        _ => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting small-roster");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let plan = match build_plan(&config) {
        Ok(plan) => plan,
        Err(e) => exit_with(&e),
    };

    let stdout = std::io::stdout().lock();
    let summary = execute(&plan, stdout).context("failed to write roster output")?;

    tracing::info!(
        "Done: {} operation(s) applied, {} rejected",
        summary.applied,
        summary.rejected
    );
    Ok(())
}

fn build_plan(config: &CliConfig) -> small_roster::Result<RunPlan> {
    let plan = match &config.script {
        Some(path) => {
            tracing::info!("Loading script from: {}", path);
            let script = ScriptConfig::from_file(path)?;
            script.validate()?;
            RunPlan::from_script(script)?
        }
        None => {
            tracing::debug!("No script given, running the built-in demo");
            RunPlan::demo()
        }
    };

    Ok(plan
        .with_format(config.format)
        .with_legacy_grade_echo(config.legacy_grade_echo))
}

fn exit_with(e: &RosterError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
