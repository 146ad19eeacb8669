// ABOUTME: Configuration management for the admissions portal
// Loads config.toml from the portal home, falling back to built-in defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::wizard::ValidationRules;

/// Environment variable that relocates the portal home directory
pub const HOME_ENV: &str = "PPDB_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub portal: PortalConfig,

    /// Schools and programs offered in the preferences step
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ui: UiConfig,

    /// Create the demo student and admin accounts when the account store is empty
    #[serde(default = "default_true")]
    pub seed_demo_accounts: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_region")]
    pub region: String,

    /// Academic year shown in headers, e.g. "2025/2026"
    #[serde(default = "default_academic_year")]
    pub academic_year: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            region: default_region(),
            academic_year: default_academic_year(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_schools")]
    pub schools: Vec<String>,

    #[serde(default = "default_programs")]
    pub programs: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            schools: default_schools(),
            programs: default_programs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Digits in a national student number (NISN)
    #[serde(default = "default_nisn_length")]
    pub nisn_length: usize,

    #[serde(default = "default_graduation_year_min")]
    pub graduation_year_min: i32,

    #[serde(default = "default_graduation_year_max")]
    pub graduation_year_max: i32,

    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            nisn_length: default_nisn_length(),
            graduation_year_min: default_graduation_year_min(),
            graduation_year_max: default_graduation_year_max(),
            min_password_len: default_min_password_len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where users.json and applications.json live (default: `<home>/data`)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long a toast stays on screen
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_seconds: default_toast_seconds(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "PPDB Online".to_string()
}

fn default_region() -> String {
    "Jawa Barat".to_string()
}

fn default_academic_year() -> String {
    "2025/2026".to_string()
}

fn default_schools() -> Vec<String> {
    (1..=5).map(|n| format!("SMA Negeri {n} Bandung")).collect()
}

fn default_programs() -> Vec<String> {
    vec!["IPA".to_string(), "IPS".to_string(), "Bahasa".to_string()]
}

fn default_nisn_length() -> usize {
    10
}

fn default_graduation_year_min() -> i32 {
    2020
}

fn default_graduation_year_max() -> i32 {
    2025
}

fn default_min_password_len() -> usize {
    8
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_seconds() -> u64 {
    4
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            portal: PortalConfig::default(),
            catalog: CatalogConfig::default(),
            validation: ValidationConfig::default(),
            storage: StorageConfig::default(),
            ui: UiConfig::default(),
            seed_demo_accounts: default_true(),
        }
    }
}

impl AppConfig {
    /// Portal home: `$PPDB_HOME` or `~/.ppdb`
    pub fn home_dir() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(home));
        }
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".ppdb"))
    }

    /// Default location of config.toml
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.toml"))
    }

    /// Load from `path`, or from the default location. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::home_dir()?.join("data")),
        }
    }

    pub fn accounts_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(crate::auth::JsonAccountStore::FILE_NAME))
    }

    pub fn applications_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(crate::applications::ApplicationStore::FILE_NAME))
    }

    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("logs"))
    }

    /// Validation limits and catalogue for the wizard
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            nisn_length: self.validation.nisn_length,
            graduation_years: self.validation.graduation_year_min..=self.validation.graduation_year_max,
            schools: self.catalog.schools.clone(),
            programs: self.catalog.programs.clone(),
            ..ValidationRules::default()
        }
    }
}
