// ABOUTME: CLI apply command - submit a registration draft file through the wizard
//
// The draft is a TOML file with [personal], [guardian], [academic] and
// [preferences] tables using the same keys as the stored JSON.

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use super::account::open_auth;
use super::{print_json, ApplyArgs, OutputFormat};
use ppdb::applications::{ApplicationStore, StoreSink};
use ppdb::config::AppConfig;
use ppdb::models::{ApplicationDraft, Role};
use ppdb::wizard::{ValidationError, WizardController, WizardError};

pub async fn execute(args: ApplyArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let auth = open_auth(config)?;
    let account = auth.login(&args.email, &args.password)?;
    if account.role != Role::Student {
        bail!("only student accounts can submit applications");
    }

    let draft = load_draft(&args.file)?;
    let mut controller = WizardController::with_draft(config.validation_rules(), draft);

    // Walk the steps exactly as the form would
    while !controller.is_final_step() {
        if let Err(err) = controller.advance() {
            return report(err, &controller);
        }
    }

    let mut store = ApplicationStore::load_from_dir(&config.data_dir()?)?;
    let mut sink = StoreSink::new(&mut store, &account.id);
    if let Err(err) = controller.submit_to(&mut sink) {
        return report(err, &controller);
    }

    let application = match sink.into_stored() {
        Some(stored) => stored?,
        None => bail!("the submitted application was not stored"),
    };
    info!("Submitted {} via CLI for {}", application.id, account.email);

    match format {
        OutputFormat::Json => print_json(&application)?,
        OutputFormat::Text => {
            println!("Application {} submitted ({})", application.id, application.status.label());
            println!("  {} - {} / {}", application.student_name, application.school, application.program);
        }
    }
    Ok(())
}

pub fn load_draft(path: &Path) -> Result<ApplicationDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft from {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse draft from {}", path.display()))
}

/// Print every problem in the draft, not just the blocking step's
fn report(err: WizardError, controller: &WizardController) -> Result<()> {
    let Some(blocking) = err.validation() else {
        return Err(err.into());
    };
    let all: ValidationError = match controller.rules().validate_all(controller.draft()) {
        Err(all) => all,
        Ok(()) => blocking.clone(),
    };

    eprintln!("Application not submitted: {} field(s) need attention", all.len());
    for error in all.errors() {
        eprintln!("  - {error}");
    }
    bail!("validation failed")
}
