// ABOUTME: Event handling system for keyboard input and portal actions
// Keys are translated per view into AppEvents, which are then applied to AppState

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::forms::{AuthField, WizardForm};
use super::router::AppView;
use super::state::AppState;
use crate::applications::ApplicationStatus;
use crate::models::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Logout,
    // Auth screen
    AuthSwitchTab,
    AuthNextField,
    AuthPreviousField,
    AuthInputChar(char),
    AuthBackspace,
    AuthToggleRole,
    AuthSubmit,
    // Registration wizard
    WizardNext,     // Enter: validate and advance, or submit on the last step
    WizardBack,     // PgUp: previous step without validation
    WizardCancel,   // Esc: abandon the draft
    WizardNextField,
    WizardPreviousField,
    WizardInputChar(char),
    WizardBackspace,
    WizardChoiceNext,
    WizardChoicePrevious,
    WizardToggleFlag,
    // Student dashboard
    StudentNewApplication,
    StudentNextTab,
    StudentSelectNext,
    StudentSelectPrevious,
    // Admin dashboard
    AdminSelectNext,
    AdminSelectPrevious,
    AdminStartSearch,
    AdminSearchChar(char),
    AdminSearchBackspace,
    AdminEndSearch,
    AdminCycleStatusFilter,
    AdminCycleSchoolFilter,
    AdminClearFilters,
    AdminSetStatus(ApplicationStatus),
    AdminReload,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        // Ctrl-C always quits, even while typing
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        match state.view {
            AppView::Auth => Self::handle_auth_keys(key_event, state),
            AppView::ApplicationForm => Self::handle_wizard_keys(key_event, state),
            AppView::StudentDashboard => Self::handle_student_keys(key_event),
            AppView::AdminDashboard => Self::handle_admin_keys(key_event, state),
        }
    }

    fn handle_auth_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Enter => Some(AppEvent::AuthSubmit),
            KeyCode::Left | KeyCode::Right => Some(AppEvent::AuthSwitchTab),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::AuthNextField),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::AuthPreviousField),
            KeyCode::Backspace => Some(AppEvent::AuthBackspace),
            KeyCode::Char(' ') if state.auth_form.focused_field() == AuthField::Role => {
                Some(AppEvent::AuthToggleRole)
            }
            KeyCode::Char(ch) => Some(AppEvent::AuthInputChar(ch)),
            _ => None,
        }
    }

    fn handle_wizard_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let kind = state
            .wizard
            .as_ref()
            .map(|wizard| wizard.selected_field().kind());

        match key_event.code {
            KeyCode::Enter => Some(AppEvent::WizardNext),
            KeyCode::PageUp => Some(AppEvent::WizardBack),
            KeyCode::Esc => Some(AppEvent::WizardCancel),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::WizardNextField),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::WizardPreviousField),
            KeyCode::Right if kind == Some(FieldKind::Choice) => Some(AppEvent::WizardChoiceNext),
            KeyCode::Left if kind == Some(FieldKind::Choice) => {
                Some(AppEvent::WizardChoicePrevious)
            }
            KeyCode::Char(' ') if kind == Some(FieldKind::Flag) => Some(AppEvent::WizardToggleFlag),
            KeyCode::Backspace => Some(AppEvent::WizardBackspace),
            KeyCode::Char(ch) => Some(AppEvent::WizardInputChar(ch)),
            _ => None,
        }
    }

    fn handle_student_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('n') => Some(AppEvent::StudentNewApplication),
            KeyCode::Char('l') => Some(AppEvent::Logout),
            KeyCode::Tab => Some(AppEvent::StudentNextTab),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::StudentSelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::StudentSelectPrevious),
            _ => None,
        }
    }

    fn handle_admin_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.admin.search_mode {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc => Some(AppEvent::AdminEndSearch),
                KeyCode::Backspace => Some(AppEvent::AdminSearchBackspace),
                KeyCode::Char(ch) => Some(AppEvent::AdminSearchChar(ch)),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('l') => Some(AppEvent::Logout),
            KeyCode::Char('/') => Some(AppEvent::AdminStartSearch),
            KeyCode::Char('s') => Some(AppEvent::AdminCycleStatusFilter),
            KeyCode::Char('f') => Some(AppEvent::AdminCycleSchoolFilter),
            KeyCode::Char('c') => Some(AppEvent::AdminClearFilters),
            KeyCode::Char('R') => Some(AppEvent::AdminReload),
            KeyCode::Char('p') => Some(AppEvent::AdminSetStatus(ApplicationStatus::Pending)),
            KeyCode::Char('r') => Some(AppEvent::AdminSetStatus(ApplicationStatus::Review)),
            KeyCode::Char('a') => Some(AppEvent::AdminSetStatus(ApplicationStatus::Accepted)),
            KeyCode::Char('x') => Some(AppEvent::AdminSetStatus(ApplicationStatus::Rejected)),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::AdminSelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::AdminSelectPrevious),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing {:?} in {:?}", event, state.view);
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::Logout => state.logout(),

            AppEvent::AuthSwitchTab => state.auth_form.switch_tab(),
            AppEvent::AuthNextField => state.auth_form.next_field(),
            AppEvent::AuthPreviousField => state.auth_form.previous_field(),
            AppEvent::AuthInputChar(ch) => state.auth_form.input_char(ch),
            AppEvent::AuthBackspace => state.auth_form.backspace(),
            AppEvent::AuthToggleRole => state.auth_form.toggle_role(),
            AppEvent::AuthSubmit => state.submit_auth(),

            AppEvent::WizardNext => state.wizard_next(),
            AppEvent::WizardBack => state.wizard_back(),
            AppEvent::WizardCancel => state.cancel_application(),
            AppEvent::WizardNextField => state.wizard_edit(|w| {
                w.next_field();
                Ok(())
            }),
            AppEvent::WizardPreviousField => state.wizard_edit(|w| {
                w.previous_field();
                Ok(())
            }),
            AppEvent::WizardInputChar(ch) => state.wizard_edit(|w| w.input_char(ch)),
            AppEvent::WizardBackspace => state.wizard_edit(WizardForm::backspace),
            AppEvent::WizardChoiceNext => state.wizard_edit(|w| w.cycle_choice(true)),
            AppEvent::WizardChoicePrevious => state.wizard_edit(|w| w.cycle_choice(false)),
            AppEvent::WizardToggleFlag => state.wizard_edit(WizardForm::toggle_flag),

            AppEvent::StudentNewApplication => state.start_application(),
            AppEvent::StudentNextTab => state.student_next_tab(),
            AppEvent::StudentSelectNext => state.student_select(true),
            AppEvent::StudentSelectPrevious => state.student_select(false),

            AppEvent::AdminSelectNext => state.admin_select(true),
            AppEvent::AdminSelectPrevious => state.admin_select(false),
            AppEvent::AdminStartSearch => state.admin.search_mode = true,
            AppEvent::AdminSearchChar(ch) => state.admin_search_input(ch),
            AppEvent::AdminSearchBackspace => state.admin_search_backspace(),
            AppEvent::AdminEndSearch => state.admin.search_mode = false,
            AppEvent::AdminCycleStatusFilter => state.admin_cycle_status_filter(),
            AppEvent::AdminCycleSchoolFilter => state.admin_cycle_school_filter(),
            AppEvent::AdminClearFilters => state.admin_clear_filters(),
            AppEvent::AdminSetStatus(status) => state.admin_set_status(status),
            AppEvent::AdminReload => state.reload_applications(),
        }
    }
}
