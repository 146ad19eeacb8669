// ABOUTME: CLI argument parsing and command routing for ppdb
//
// Provides command-line interface for:
// - Account management (register, login)
// - Submitting a registration draft file through the wizard (apply)
// - Admin operations (list, set-status, docs)
// - Configuration (config init/show)
// - Launching TUI (tui, default)

pub mod account;
pub mod apply;
pub mod list;
pub mod settings;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use ppdb::models::Role;

/// PPDB online: student admissions portal
#[derive(Parser)]
#[command(name = "ppdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ~/.ppdb/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Create an account
    Register(RegisterArgs),

    /// Check credentials
    Login(LoginArgs),

    /// Submit a registration draft file
    Apply(ApplyArgs),

    /// List applications
    List(ListArgs),

    /// Change an application's status
    SetStatus(SetStatusArgs),

    /// Update an application's document checklist
    Docs(DocsArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the register command
#[derive(clap::Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub confirm_password: String,

    /// student or admin
    #[arg(long, default_value = "student")]
    pub role: Role,
}

/// Arguments for the login command
#[derive(clap::Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

/// Arguments for the apply command
#[derive(clap::Args)]
pub struct ApplyArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    /// TOML file with the draft's sections
    #[arg(long)]
    pub file: PathBuf,
}

/// Arguments for the list command
#[derive(clap::Args)]
pub struct ListArgs {
    /// Match name, NISN or application ID
    #[arg(long)]
    pub search: Option<String>,

    /// pending, review, accepted or rejected
    #[arg(long)]
    pub status: Option<String>,

    /// First-choice school
    #[arg(long)]
    pub school: Option<String>,
}

/// Arguments for the set-status command
#[derive(clap::Args)]
pub struct SetStatusArgs {
    /// Application ID or unique prefix
    pub id: String,

    /// pending, review, accepted or rejected
    pub status: String,
}

/// Arguments for the docs command
#[derive(clap::Args)]
pub struct DocsArgs {
    /// Application ID or unique prefix
    pub id: String,

    /// ijazah, kk, akta, rapor, prestasi or sktm
    pub document: String,

    /// not_uploaded, pending or uploaded
    pub state: String,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

/// Print `value` as pretty JSON
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}
