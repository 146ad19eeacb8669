// ABOUTME: Tests for portal state transitions driven through the event handler
// Login, registration, the wizard round trip and admin status changes

#[allow(dead_code)]
#[path = "behavioral/fixtures.rs"]
mod fixtures;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use fixtures::valid_draft;
use ppdb::app::{AppState, AppView, AuthTab, EventHandler, StudentTab};
use ppdb::applications::{ApplicationStatus, ApplicationStore};
use ppdb::auth::{demo_accounts, InMemoryAccountRepository, DEMO_PASSWORD};
use ppdb::config::AppConfig;
use ppdb::models::{Field, Role};
use ppdb::notify::NotificationKind;
use ppdb::wizard::WizardStep;

fn test_state() -> AppState {
    AppState::with_parts(
        AppConfig::default(),
        Box::new(InMemoryAccountRepository::with_accounts(demo_accounts())),
        ApplicationStore::in_memory(),
    )
}

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state) {
        EventHandler::process_event(event, state);
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        press(state, KeyCode::Char(ch));
    }
}

fn login(state: &mut AppState, email: &str, password: &str) {
    type_text(state, email);
    press(state, KeyCode::Tab);
    type_text(state, password);
    press(state, KeyCode::Enter);
}

/// Fill the open wizard with values that pass every step
fn fill_wizard(state: &mut AppState) {
    let draft = valid_draft();
    for step in WizardStep::all() {
        for field in step.fields() {
            let value = draft.get(*field).into_owned();
            state.wizard_edit(|w| w.controller.set_field(*field, value));
        }
    }
}

#[test]
fn test_login_routes_by_role() {
    let mut state = test_state();
    login(&mut state, "student@ppdb.jabar.go.id", DEMO_PASSWORD);
    assert_eq!(state.view, AppView::StudentDashboard);
    assert_eq!(state.session.as_ref().map(|a| a.role), Some(Role::Student));
    assert!(state.auth_form.password.is_empty());

    press(&mut state, KeyCode::Char('l'));
    assert_eq!(state.view, AppView::Auth);
    assert!(state.session.is_none());

    login(&mut state, "ADMIN@ppdb.jabar.go.id", DEMO_PASSWORD);
    assert_eq!(state.view, AppView::AdminDashboard);
}

#[test]
fn test_failed_login_stays_on_auth_with_error() {
    let mut state = test_state();
    login(&mut state, "student@ppdb.jabar.go.id", "nope");

    assert_eq!(state.view, AppView::Auth);
    assert!(state.auth_form.error.is_some());
    assert!(state.auth_form.password.is_empty(), "secrets are cleared after an attempt");
    assert_eq!(state.toasts.latest().map(|t| t.kind), Some(NotificationKind::Error));
}

#[test]
fn test_register_signs_in_and_lands_on_dashboard() {
    let mut state = test_state();
    press(&mut state, KeyCode::Right);
    assert_eq!(state.auth_form.tab, AuthTab::Register);

    type_text(&mut state, "Dewi Lestari");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "dewi@example.com");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "081311112222");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "rahasia123");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "rahasia123");
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.view, AppView::StudentDashboard);
    assert_eq!(state.session.as_ref().map(|a| a.name.as_str()), Some("Dewi Lestari"));
    assert!(state.auth_form.password.is_empty());
    assert_eq!(state.toasts.latest().map(|t| t.kind), Some(NotificationKind::Success));

    // The account also works for a later login
    press(&mut state, KeyCode::Char('l'));
    login(&mut state, "dewi@example.com", "rahasia123");
    assert_eq!(state.view, AppView::StudentDashboard);
}

#[test]
fn test_wizard_submission_creates_application() {
    let mut state = test_state();
    login(&mut state, "student@ppdb.jabar.go.id", DEMO_PASSWORD);
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.view, AppView::ApplicationForm);

    // Prefilled from the account
    let prefilled = state.wizard.as_ref().map(|w| w.controller.value(Field::Email).into_owned());
    assert_eq!(prefilled.as_deref(), Some("student@ppdb.jabar.go.id"));

    fill_wizard(&mut state);
    for _ in 0..3 {
        press(&mut state, KeyCode::Enter);
    }
    assert_eq!(state.wizard.as_ref().map(|w| w.step()), Some(WizardStep::SchoolPreferences));

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.view, AppView::StudentDashboard);
    assert!(state.wizard.is_none());

    let mine = state.my_applications();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, ApplicationStatus::Pending);
    assert_eq!(mine[0].nisn, "0987654321");
}

#[test]
fn test_invalid_step_keeps_wizard_open() {
    let mut state = test_state();
    login(&mut state, "student@ppdb.jabar.go.id", DEMO_PASSWORD);
    press(&mut state, KeyCode::Char('n'));
    fill_wizard(&mut state);
    state.wizard_edit(|w| w.controller.set_field(Field::Nisn, "12345"));

    press(&mut state, KeyCode::Enter);
    let wizard = state.wizard.as_ref().expect("wizard still open");
    assert_eq!(wizard.step(), WizardStep::Personal);
    assert_eq!(wizard.selected_field(), Field::Nisn);
    assert!(wizard.problem(Field::Nisn).is_some());
    assert_eq!(state.toasts.latest().map(|t| t.kind), Some(NotificationKind::Error));
}

#[test]
fn test_back_and_cancel() {
    let mut state = test_state();
    login(&mut state, "student@ppdb.jabar.go.id", DEMO_PASSWORD);
    press(&mut state, KeyCode::Char('n'));
    fill_wizard(&mut state);

    // Back on step 1 is a no-op
    press(&mut state, KeyCode::PageUp);
    assert_eq!(state.wizard.as_ref().map(|w| w.step()), Some(WizardStep::Personal));

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::PageUp);
    assert_eq!(state.wizard.as_ref().map(|w| w.step()), Some(WizardStep::Personal));

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.view, AppView::StudentDashboard);
    assert!(state.wizard.is_none());
    assert!(state.my_applications().is_empty());
}

#[test]
fn test_admin_filters_and_status_change() {
    let mut applications = ApplicationStore::in_memory();
    applications.insert("demo-student", valid_draft()).unwrap();
    let mut other = valid_draft();
    other.set(Field::FullName, "Budi Santoso");
    other.set(Field::FirstChoice, "SMA Negeri 1 Bandung");
    applications.insert("someone-else", other).unwrap();

    let mut state = AppState::with_parts(
        AppConfig::default(),
        Box::new(InMemoryAccountRepository::with_accounts(demo_accounts())),
        applications,
    );
    login(&mut state, "admin@ppdb.jabar.go.id", DEMO_PASSWORD);
    assert_eq!(state.filtered_applications().len(), 2);

    press(&mut state, KeyCode::Char('/'));
    type_text(&mut state, "budi");
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.filtered_applications().len(), 1);

    press(&mut state, KeyCode::Char('a'));
    assert_eq!(
        state.applications.find("APP002").unwrap().status,
        ApplicationStatus::Accepted
    );

    // Accepted cannot go straight back to pending
    press(&mut state, KeyCode::Char('p'));
    assert_eq!(
        state.applications.find("APP002").unwrap().status,
        ApplicationStatus::Accepted
    );
    assert_eq!(state.toasts.latest().map(|t| t.kind), Some(NotificationKind::Error));

    press(&mut state, KeyCode::Char('c'));
    press(&mut state, KeyCode::Char('s'));
    assert_eq!(state.admin.filter.status, Some(ApplicationStatus::Pending));
    assert_eq!(state.filtered_applications().len(), 1);
}

#[test]
fn test_student_tabs_cycle() {
    let mut state = test_state();
    login(&mut state, "student@ppdb.jabar.go.id", DEMO_PASSWORD);
    assert_eq!(state.student.tab, StudentTab::Applications);
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.student.tab, StudentTab::Notifications);
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.student.tab, StudentTab::Applications);
}

#[test]
fn test_admin_cannot_open_wizard() {
    let mut state = test_state();
    login(&mut state, "admin@ppdb.jabar.go.id", DEMO_PASSWORD);
    state.start_application();
    assert_eq!(state.view, AppView::AdminDashboard);
    assert!(state.wizard.is_none());
}

#[test]
fn test_unsaved_application_does_not_appear_on_dashboard() {
    let dir = tempfile::TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let applications = ApplicationStore::load(blocker.join(ApplicationStore::FILE_NAME)).unwrap();

    let mut state = AppState::with_parts(
        AppConfig::default(),
        Box::new(InMemoryAccountRepository::with_accounts(demo_accounts())),
        applications,
    );
    login(&mut state, "student@ppdb.jabar.go.id", DEMO_PASSWORD);
    press(&mut state, KeyCode::Char('n'));
    fill_wizard(&mut state);
    for _ in 0..4 {
        press(&mut state, KeyCode::Enter);
    }

    // The write failed, so the wizard stays open with the entered data
    assert_eq!(state.view, AppView::ApplicationForm);
    assert_eq!(state.toasts.latest().map(|t| t.kind), Some(NotificationKind::Error));
    let nisn = state.wizard.as_ref().map(|w| w.controller.value(Field::Nisn).into_owned());
    assert_eq!(nisn.as_deref(), Some("0987654321"));

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.view, AppView::StudentDashboard);
    assert!(state.my_applications().is_empty());
    assert!(state.applications.is_empty());
}

#[test]
fn test_empty_school_catalogue_accepts_typed_school() {
    let mut config = AppConfig::default();
    config.catalog.schools.clear();
    let mut state = AppState::with_parts(
        config,
        Box::new(InMemoryAccountRepository::with_accounts(demo_accounts())),
        ApplicationStore::in_memory(),
    );
    login(&mut state, "student@ppdb.jabar.go.id", DEMO_PASSWORD);
    press(&mut state, KeyCode::Char('n'));
    fill_wizard(&mut state);
    state.wizard_edit(|w| w.controller.set_field(Field::FirstChoice, ""));
    for _ in 0..3 {
        press(&mut state, KeyCode::Enter);
    }

    let first_choice = state
        .wizard
        .as_ref()
        .and_then(|w| w.fields().iter().position(|f| *f == Field::FirstChoice))
        .unwrap();
    if let Some(wizard) = state.wizard.as_mut() {
        wizard.selected = first_choice;
    }
    type_text(&mut state, "SMA Harapan Bangsa");
    // Arrows have nothing to cycle through
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.view, AppView::StudentDashboard);
    let mine = state.my_applications();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].school, "SMA Harapan Bangsa");
}
