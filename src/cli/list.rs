// ABOUTME: CLI list command - admin listing of submitted applications
//
// Filters by search text (name, NISN, ID), status and first-choice school

use anyhow::Result;

use super::{print_json, truncate, ListArgs, OutputFormat};
use ppdb::applications::{Application, ApplicationFilter, ApplicationStatus, ApplicationStore};
use ppdb::config::AppConfig;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let store = ApplicationStore::load_from_dir(&config.data_dir()?)?;
    let filter = build_filter(&args)?;
    let mut applications = filter.apply(store.all());

    // Newest first
    applications.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

    match format {
        OutputFormat::Json => print_json(&applications)?,
        OutputFormat::Text => output_text(&applications, store.len()),
    }

    Ok(())
}

pub fn build_filter(args: &ListArgs) -> Result<ApplicationFilter> {
    let status = match &args.status {
        Some(status) => Some(status.parse::<ApplicationStatus>()?),
        None => None,
    };
    Ok(ApplicationFilter {
        search: args.search.clone().unwrap_or_default(),
        status,
        school: args.school.clone(),
    })
}

/// Output applications as a text table
fn output_text(applications: &[&Application], total: usize) {
    if applications.is_empty() {
        println!("No applications found.");
        return;
    }

    println!(
        "{:<8} {:<24} {:<12} {:<24} {:<8} {:<6} STATUS",
        "ID", "NAME", "NISN", "SCHOOL", "PROGRAM", "GRADE"
    );
    println!("{}", "-".repeat(100));

    for app in applications {
        println!(
            "{:<8} {:<24} {:<12} {:<24} {:<8} {:<6} {}",
            app.id,
            truncate(&app.student_name, 24),
            app.nisn,
            truncate(&app.school, 24),
            truncate(&app.program, 8),
            app.average_grade,
            app.status.label()
        );
    }
    println!("\nShowing {} of {}", applications.len(), total);
}
