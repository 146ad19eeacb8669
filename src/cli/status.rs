// ABOUTME: CLI set-status and docs commands - admin updates to a stored application

use anyhow::Result;

use super::{print_json, DocsArgs, OutputFormat, SetStatusArgs};
use ppdb::applications::{Application, ApplicationStatus, ApplicationStore, DocumentKind, DocumentState};
use ppdb::config::AppConfig;

/// Execute the set-status command
pub async fn execute(args: SetStatusArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let status: ApplicationStatus = args.status.parse()?;
    let mut store = ApplicationStore::load_from_dir(&config.data_dir()?)?;
    let application = store.set_status(&args.id, status)?;
    output(&application, format, |app| {
        println!("{} is now {}", app.id, app.status.label());
    })
}

/// Execute the docs command
pub async fn documents(args: DocsArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let kind: DocumentKind = args.document.parse()?;
    let state: DocumentState = args.state.parse()?;
    let mut store = ApplicationStore::load_from_dir(&config.data_dir()?)?;
    let application = store.mark_document(&args.id, kind, state)?;
    output(&application, format, |app| {
        println!("{}: {} marked {}", app.id, kind.label(), state.label());
        println!(
            "Documents complete: {}/{}",
            app.documents.completed(),
            app.documents.total()
        );
        let missing = app.documents.missing_required();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|kind| kind.label()).collect();
            println!("Still required: {}", names.join(", "));
        }
    })
}

fn output(application: &Application, format: OutputFormat, text: impl FnOnce(&Application)) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(application)?,
        OutputFormat::Text => text(application),
    }
    Ok(())
}
