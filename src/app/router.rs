// ABOUTME: View router for the portal shell: auth -> dashboard -> wizard -> dashboard
// One transition table; events that do not apply to the current view are ignored

use crate::models::Role;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppView {
    #[default]
    Auth,
    StudentDashboard,
    AdminDashboard,
    ApplicationForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    LoggedIn(Role),
    LoggedOut,
    StartApplication,
    ApplicationSubmitted,
    ApplicationCancelled,
}

impl AppView {
    /// Dashboard a role lands on after login
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentDashboard,
            Role::Admin => Self::AdminDashboard,
        }
    }

    /// Next view, or `None` when the event does not apply here
    pub fn on(self, event: ViewEvent) -> Option<AppView> {
        use AppView::*;
        use ViewEvent::*;

        match (self, event) {
            (Auth, LoggedIn(role)) => Some(Self::home_for(role)),
            (StudentDashboard | AdminDashboard | ApplicationForm, LoggedOut) => Some(Auth),
            // Only students have an application form
            (StudentDashboard, StartApplication) => Some(ApplicationForm),
            (ApplicationForm, ApplicationSubmitted | ApplicationCancelled) => Some(StudentDashboard),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Auth => "Sign in",
            Self::StudentDashboard => "Student Dashboard",
            Self::AdminDashboard => "Admin Dashboard",
            Self::ApplicationForm => "Registration Form",
        }
    }
}
