// ABOUTME: CLI register and login commands against the account store

use anyhow::Result;
use serde::Serialize;

use super::{print_json, LoginArgs, OutputFormat, RegisterArgs};
use ppdb::auth::{seed_demo_accounts, AuthService, JsonAccountStore, RegistrationForm};
use ppdb::config::AppConfig;
use ppdb::models::{Account, Role};

/// Account as printed by the CLI; never includes the password
#[derive(Debug, Serialize)]
pub struct AccountInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            role: account.role,
        }
    }
}

/// Open the configured account store, seeding demo accounts when enabled
pub fn open_auth(config: &AppConfig) -> Result<AuthService<JsonAccountStore>> {
    let mut store = JsonAccountStore::in_dir(&config.data_dir()?);
    if config.seed_demo_accounts {
        seed_demo_accounts(&mut store)?;
    }
    Ok(AuthService::new(store, config.validation.min_password_len))
}

pub async fn register(args: RegisterArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let mut auth = open_auth(config)?;
    let account = auth.register(RegistrationForm {
        name: args.name,
        email: args.email,
        phone: args.phone,
        password: args.password,
        confirm_password: args.confirm_password,
        role: args.role,
    })?;

    output(&account, "Registered", format)
}

pub async fn login(args: LoginArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let auth = open_auth(config)?;
    let account = auth.login(&args.email, &args.password)?;
    output(&account, "Logged in as", format)
}

fn output(account: &Account, verb: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&AccountInfo::from(account))?,
        OutputFormat::Text => {
            println!("{verb} {} <{}> ({})", account.name, account.email, account.role);
            println!("Account ID: {}", account.id);
        }
    }
    Ok(())
}
