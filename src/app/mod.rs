// ABOUTME: Main application structure and state management for the TUI

pub mod events;
pub mod forms;
pub mod router;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use forms::{AuthField, AuthForm, AuthTab, WizardForm};
pub use router::{AppView, ViewEvent};
pub use state::{AdminState, AppState, StudentState, StudentTab};
