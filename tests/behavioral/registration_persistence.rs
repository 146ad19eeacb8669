// ABOUTME: Behavioral tests for accounts and applications persisted under a data directory
// Two handles on the same directory stand in for two running portal instances

use pretty_assertions::assert_eq;

use super::fixtures::{valid_draft, TestPortal};
use ppdb::applications::{
    ApplicationError, ApplicationStatus, ApplicationStore, DocumentKind, DocumentState, StoreSink,
};
use ppdb::auth::{
    seed_demo_accounts, AccountRepository, AuthError, AuthService, JsonAccountStore,
    RegistrationForm, DEMO_PASSWORD,
};
use ppdb::models::Role;
use ppdb::wizard::WizardController;

fn registration(email: &str) -> RegistrationForm {
    RegistrationForm {
        name: "Dewi Lestari".to_string(),
        email: email.to_string(),
        phone: "081311112222".to_string(),
        password: "rahasia123".to_string(),
        confirm_password: "rahasia123".to_string(),
        role: Role::Student,
    }
}

#[test]
fn test_registered_account_survives_reopen() {
    let portal = TestPortal::new().unwrap();
    let mut auth = AuthService::new(JsonAccountStore::in_dir(portal.data_dir()), 8);
    let created = auth.register(registration("dewi@example.com")).unwrap();

    let reopened = AuthService::new(JsonAccountStore::in_dir(portal.data_dir()), 8);
    let account = reopened.login("DEWI@example.com", "rahasia123").unwrap();
    assert_eq!(account.id, created.id);
    assert!(account.is_logged_in);

    assert!(matches!(
        reopened.login("dewi@example.com", "wrong-password"),
        Err(AuthError::Mismatch)
    ));
}

#[test]
fn test_duplicate_email_is_refused_across_handles() {
    let portal = TestPortal::new().unwrap();
    let mut first = AuthService::new(JsonAccountStore::in_dir(portal.data_dir()), 8);
    let mut second = AuthService::new(JsonAccountStore::in_dir(portal.data_dir()), 8);

    first.register(registration("dewi@example.com")).unwrap();
    let err = second.register(registration("Dewi@Example.com")).unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken(_)));
}

#[test]
fn test_demo_accounts_seeded_once() {
    let portal = TestPortal::new().unwrap();
    let mut store = JsonAccountStore::in_dir(portal.data_dir());

    assert_eq!(seed_demo_accounts(&mut store).unwrap(), 2);
    assert_eq!(seed_demo_accounts(&mut store).unwrap(), 0);
    assert_eq!(store.all().unwrap().len(), 2);

    let auth = AuthService::new(store, 8);
    let admin = auth.login("admin@ppdb.jabar.go.id", DEMO_PASSWORD).unwrap();
    assert_eq!(admin.role, Role::Admin);
}

#[test]
fn test_submitted_wizard_lands_in_store() {
    let portal = TestPortal::new().unwrap();
    let mut store = ApplicationStore::load_from_dir(portal.data_dir()).unwrap();

    let mut wizard = WizardController::with_draft(portal.config.validation_rules(), valid_draft());
    for _ in 0..3 {
        wizard.advance().unwrap();
    }
    let mut sink = StoreSink::new(&mut store, "acct-1");
    wizard.submit_to(&mut sink).unwrap();
    let application = sink.into_stored().expect("sink called").unwrap();

    assert_eq!(application.id, "APP001");
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.student_name, "Siti Nurhaliza");

    let reopened = ApplicationStore::load_from_dir(portal.data_dir()).unwrap();
    assert_eq!(reopened.for_account("acct-1").len(), 1);
}

#[test]
fn test_two_instances_see_each_others_writes() {
    let portal = TestPortal::new().unwrap();
    let mut student_side = ApplicationStore::load_from_dir(portal.data_dir()).unwrap();
    let mut admin_side = ApplicationStore::load_from_dir(portal.data_dir()).unwrap();

    student_side.insert("acct-1", valid_draft()).unwrap();
    // The admin handle has not reloaded yet, but mutations reload first
    let reviewed = admin_side.set_status("APP001", ApplicationStatus::Review).unwrap();
    assert_eq!(reviewed.status, ApplicationStatus::Review);

    let second = student_side.insert("acct-2", valid_draft()).unwrap();
    assert_eq!(second.id, "APP002");
    assert_eq!(
        student_side.find("APP001").unwrap().status,
        ApplicationStatus::Review
    );
}

#[test]
fn test_invalid_transition_leaves_file_untouched() {
    let portal = TestPortal::new().unwrap();
    let mut store = ApplicationStore::load_from_dir(portal.data_dir()).unwrap();
    store.insert("acct-1", valid_draft()).unwrap();
    store.set_status("APP001", ApplicationStatus::Accepted).unwrap();

    let err = store.set_status("APP001", ApplicationStatus::Pending).unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidTransition { .. }));

    let reopened = ApplicationStore::load_from_dir(portal.data_dir()).unwrap();
    assert_eq!(reopened.find("app001").unwrap().status, ApplicationStatus::Accepted);
}

#[test]
fn test_document_checklist_updates_persist() {
    let portal = TestPortal::new().unwrap();
    let mut store = ApplicationStore::load_from_dir(portal.data_dir()).unwrap();
    store.insert("acct-1", valid_draft()).unwrap();

    let updated = store
        .mark_document("APP001", DocumentKind::FamilyCard, DocumentState::Uploaded)
        .unwrap();
    assert_eq!(updated.documents.completed(), 1);
    assert!(!updated.documents.missing_required().contains(&DocumentKind::FamilyCard));

    let reopened = ApplicationStore::load_from_dir(portal.data_dir()).unwrap();
    assert_eq!(
        reopened.find("APP001").unwrap().documents.state(DocumentKind::FamilyCard),
        DocumentState::Uploaded
    );
}
