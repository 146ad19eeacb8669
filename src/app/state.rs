// ABOUTME: Application state for the portal TUI: session, current view, forms and stores
// All user actions land here as methods; the event handler only translates keys

use anyhow::Result;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::forms::{AuthForm, AuthTab, WizardForm};
use super::router::{AppView, ViewEvent};
use crate::applications::{
    Application, ApplicationFilter, ApplicationStatus, ApplicationStore, StoreSink,
};
use crate::auth::{seed_demo_accounts, AccountRepository, AuthService, JsonAccountStore};
use crate::config::AppConfig;
use crate::models::{Account, ApplicationDraft, Field};
use crate::notify::{NotificationKind, Notifier, ToastQueue};
use crate::wizard::{WizardController, WizardError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StudentTab {
    #[default]
    Applications,
    Notifications,
    Documents,
}

impl StudentTab {
    pub fn all() -> &'static [StudentTab] {
        &[Self::Applications, Self::Notifications, Self::Documents]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Applications => "Applications",
            Self::Notifications => "Notifications",
            Self::Documents => "Documents",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Applications => Self::Notifications,
            Self::Notifications => Self::Documents,
            Self::Documents => Self::Applications,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentState {
    pub tab: StudentTab,
    pub selected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub filter: ApplicationFilter,
    pub selected: usize,
    pub search_mode: bool,
}

pub struct AppState {
    pub config: AppConfig,
    pub view: AppView,
    pub session: Option<Account>,
    pub auth: AuthService<Box<dyn AccountRepository>>,
    pub applications: ApplicationStore,
    pub auth_form: AuthForm,
    pub wizard: Option<WizardForm>,
    pub student: StudentState,
    pub admin: AdminState,
    pub toasts: ToastQueue,
    pub should_quit: bool,
}

impl AppState {
    /// Open the file-backed stores under the configured data directory
    pub fn open(config: AppConfig) -> Result<Self> {
        let data_dir = config.data_dir()?;
        let mut accounts: Box<dyn AccountRepository> = Box::new(JsonAccountStore::in_dir(&data_dir));
        if config.seed_demo_accounts {
            seed_demo_accounts(&mut accounts)?;
        }
        let applications = ApplicationStore::load_from_dir(&data_dir)?;
        info!("Opened portal data in {}", data_dir.display());
        Ok(Self::with_parts(config, accounts, applications))
    }

    pub fn with_parts(
        config: AppConfig,
        accounts: Box<dyn AccountRepository>,
        applications: ApplicationStore,
    ) -> Self {
        let auth = AuthService::new(accounts, config.validation.min_password_len);
        let toasts = ToastQueue::new(Duration::from_secs(config.ui.toast_seconds), 3);
        Self {
            config,
            view: AppView::default(),
            session: None,
            auth,
            applications,
            auth_form: AuthForm::default(),
            wizard: None,
            student: StudentState::default(),
            admin: AdminState::default(),
            toasts,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.toasts.prune();
    }

    fn navigate(&mut self, event: ViewEvent) -> bool {
        match self.view.on(event) {
            Some(next) => {
                debug!("View {:?} -> {:?} on {:?}", self.view, next, event);
                self.view = next;
                true
            }
            None => {
                debug!("Ignoring {:?} in {:?}", event, self.view);
                false
            }
        }
    }

    // Auth screen

    pub fn submit_auth(&mut self) {
        match self.auth_form.tab {
            AuthTab::Login => self.login(),
            AuthTab::Register => self.register(),
        }
    }

    fn login(&mut self) {
        let result = self.auth.login(&self.auth_form.email, &self.auth_form.password);
        self.auth_form.clear_secrets();
        match result {
            Ok(account) => {
                self.toasts
                    .notify(NotificationKind::Success, &format!("Welcome, {}", account.name));
                self.auth_form = AuthForm::default();
                self.student = StudentState::default();
                self.admin = AdminState::default();
                let role = account.role;
                self.session = Some(account);
                self.navigate(ViewEvent::LoggedIn(role));
            }
            Err(err) => {
                self.auth_form.error = Some(err.to_string());
                self.toasts.notify(NotificationKind::Error, "Invalid email or password");
            }
        }
    }

    fn register(&mut self) {
        let result = self.auth.register(self.auth_form.registration());
        self.auth_form.clear_secrets();
        match result {
            Ok(account) => {
                // A fresh account is signed in straight away
                self.toasts.notify(
                    NotificationKind::Success,
                    &format!("Welcome, {}! Your account is ready", account.name),
                );
                self.auth_form = AuthForm::default();
                self.student = StudentState::default();
                self.admin = AdminState::default();
                let role = account.role;
                self.session = Some(account);
                self.navigate(ViewEvent::LoggedIn(role));
            }
            Err(err) => {
                self.auth_form.error = Some(err.to_string());
                self.toasts.notify(NotificationKind::Error, &err.to_string());
            }
        }
    }

    pub fn logout(&mut self) {
        if self.navigate(ViewEvent::LoggedOut) {
            if let Some(wizard) = self.wizard.take() {
                wizard.controller.cancel();
            }
            self.session = None;
            self.toasts.notify(NotificationKind::Info, "You have been logged out");
        }
    }

    // Student dashboard

    /// Applications belonging to the logged-in account
    pub fn my_applications(&self) -> Vec<&Application> {
        match &self.session {
            Some(account) => self.applications.for_account(&account.id),
            None => Vec::new(),
        }
    }

    pub fn selected_student_application(&self) -> Option<&Application> {
        let mine = self.my_applications();
        mine.get(self.student.selected.min(mine.len().saturating_sub(1))).copied()
    }

    pub fn student_select(&mut self, forward: bool) {
        let len = self.my_applications().len();
        self.student.selected = step_index(self.student.selected, len, forward);
    }

    pub fn student_next_tab(&mut self) {
        self.student.tab = self.student.tab.next();
    }

    pub fn start_application(&mut self) {
        if !self.navigate(ViewEvent::StartApplication) {
            return;
        }
        let mut draft = ApplicationDraft::new();
        if let Some(account) = &self.session {
            draft.set(Field::FullName, account.name.as_str());
            draft.set(Field::Email, account.email.as_str());
            draft.set(Field::Phone, account.phone.as_str());
        }
        let controller = WizardController::with_draft(self.config.validation_rules(), draft);
        self.wizard = Some(WizardForm::new(controller));
    }

    // Registration wizard

    /// Enter: advance, or submit on the last step
    pub fn wizard_next(&mut self) {
        let on_final_step = match &self.wizard {
            Some(wizard) => wizard.controller.is_final_step(),
            None => return,
        };
        if on_final_step {
            self.submit_application();
        } else {
            self.wizard_edit(WizardForm::advance);
        }
    }

    pub fn wizard_back(&mut self) {
        // Retreating from step 1 is a no-op
        if self.wizard.as_ref().is_some_and(|w| w.controller.can_retreat()) {
            self.wizard_edit(WizardForm::retreat);
        }
    }

    pub fn cancel_application(&mut self) {
        if let Some(wizard) = self.wizard.take() {
            wizard.controller.cancel();
            self.navigate(ViewEvent::ApplicationCancelled);
            self.toasts.notify(NotificationKind::Info, "Registration cancelled");
        }
    }

    /// Run a wizard edit, surfacing refusals as toasts
    pub fn wizard_edit<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut WizardForm) -> Result<(), WizardError>,
    {
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };
        if let Err(err) = edit(wizard) {
            self.report_wizard_error(&err);
        }
    }

    fn submit_application(&mut self) {
        let (Some(wizard), Some(account)) = (self.wizard.as_mut(), self.session.as_ref()) else {
            return;
        };

        let mut sink = StoreSink::new(&mut self.applications, &account.id);
        let submitted = wizard.submit_with(|controller| controller.submit_to(&mut sink));
        let stored = sink.into_stored();

        match (submitted, stored) {
            (Ok(_), Some(Ok(application))) => {
                self.wizard = None;
                self.navigate(ViewEvent::ApplicationSubmitted);
                self.student = StudentState::default();
                self.toasts.notify(
                    NotificationKind::Success,
                    &format!("Application {} submitted", application.id),
                );
            }
            (Ok(draft), stored) => {
                let reason = match stored {
                    Some(Err(err)) => err.to_string(),
                    _ => "the application was not stored".to_string(),
                };
                warn!("Submitted draft could not be saved: {}", reason);
                // Keep the entered data in a fresh, editable wizard
                let controller = WizardController::with_draft(self.config.validation_rules(), draft);
                self.wizard = Some(WizardForm::new(controller));
                self.toasts.notify(
                    NotificationKind::Error,
                    &format!("Could not save application: {reason}"),
                );
            }
            (Err(err), _) => self.report_wizard_error(&err),
        }
    }

    fn report_wizard_error(&mut self, err: &WizardError) {
        let message = match err.validation() {
            Some(errors) => format!("{} field(s) need attention", errors.len()),
            None => err.to_string(),
        };
        self.toasts.notify(NotificationKind::Error, &message);
    }

    // Admin dashboard

    pub fn filtered_applications(&self) -> Vec<&Application> {
        self.admin.filter.apply(self.applications.all())
    }

    pub fn selected_admin_application(&self) -> Option<&Application> {
        let filtered = self.filtered_applications();
        filtered
            .get(self.admin.selected.min(filtered.len().saturating_sub(1)))
            .copied()
    }

    pub fn admin_select(&mut self, forward: bool) {
        let len = self.filtered_applications().len();
        self.admin.selected = step_index(self.admin.selected, len, forward);
    }

    pub fn admin_cycle_status_filter(&mut self) {
        self.admin.filter.cycle_status();
        self.admin.selected = 0;
    }

    pub fn admin_cycle_school_filter(&mut self) {
        let schools = self.config.catalog.schools.clone();
        self.admin.filter.cycle_school(&schools);
        self.admin.selected = 0;
    }

    pub fn admin_clear_filters(&mut self) {
        self.admin.filter = ApplicationFilter::default();
        self.admin.selected = 0;
    }

    pub fn admin_search_input(&mut self, c: char) {
        self.admin.filter.search.push(c);
        self.admin.selected = 0;
    }

    pub fn admin_search_backspace(&mut self) {
        self.admin.filter.search.pop();
        self.admin.selected = 0;
    }

    pub fn admin_set_status(&mut self, status: ApplicationStatus) {
        let Some(id) = self.selected_admin_application().map(|app| app.id.clone()) else {
            return;
        };
        match self.applications.set_status(&id, status) {
            Ok(app) => self.toasts.notify(
                NotificationKind::Success,
                &format!("{} is now {}", app.id, app.status.label()),
            ),
            Err(err) => {
                warn!("Status change failed: {}", err);
                self.toasts.notify(NotificationKind::Error, &err.to_string());
            }
        }
    }

    /// Pick up changes written by other instances
    pub fn reload_applications(&mut self) {
        if let Err(err) = self.applications.reload() {
            warn!("Failed to reload applications: {}", err);
        }
    }
}

fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
