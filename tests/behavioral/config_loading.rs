// ABOUTME: Behavioral tests for configuration loading and the rules it feeds the wizard

use std::fs;

use super::fixtures::{valid_draft, TestPortal};
use ppdb::config::AppConfig;
use ppdb::models::Field;
use ppdb::wizard::{FieldProblem, WizardController, WizardStep};

/// Defaults are usable without any config file
#[test]
fn test_default_config_has_sensible_values() {
    let config = AppConfig::default();

    assert_eq!(config.validation.nisn_length, 10, "NISN is ten digits by default");
    assert_eq!(config.validation.min_password_len, 8);
    assert!(config.catalog.programs.contains(&"IPA".to_string()));
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.storage.data_dir, None);
}

/// Schools outside the configured catalogue are refused on the last step
#[test]
fn test_catalog_limits_school_choices() {
    let portal = TestPortal::new().unwrap();
    let mut draft = valid_draft();
    draft.set(Field::FirstChoice, "SMA Swasta Antah Berantah");

    let mut wizard = WizardController::with_draft(portal.config.validation_rules(), draft);
    for _ in 0..3 {
        wizard.advance().unwrap();
    }
    let err = wizard.advance().unwrap_err();
    assert!(err.validation().is_none(), "no step after the last one");

    let err = wizard.submit().unwrap_err();
    assert!(matches!(
        err.validation().and_then(|v| v.problem_for(Field::FirstChoice)),
        Some(FieldProblem::UnknownChoice { .. })
    ));
}

/// A config file can tighten the NISN length the wizard enforces
#[test]
fn test_config_file_overrides_validation() {
    let portal = TestPortal::new().unwrap();
    let path = portal.dir.path().join("config.toml");
    fs::write(&path, "[validation]\nnisn_length = 12\n").unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    let mut wizard = WizardController::with_draft(config.validation_rules(), valid_draft());
    let err = wizard.advance().unwrap_err();
    assert_eq!(err.validation().map(|v| v.fields()), Some(vec![Field::Nisn]));
    assert_eq!(wizard.current_step(), WizardStep::Personal);
}

/// Unparseable config is reported with the file path
#[test]
fn test_broken_config_names_the_file() {
    let portal = TestPortal::new().unwrap();
    let path = portal.dir.path().join("config.toml");
    fs::write(&path, "[validation\nnisn_length = ").unwrap();

    let err = AppConfig::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}
