// ABOUTME: UI components for the portal: auth screen, dashboards, registration wizard and toasts

pub mod admin;
pub mod auth;
pub mod layout;
pub mod student;
pub mod theme;
pub mod toast;
pub mod wizard;

pub use admin::AdminDashboardComponent;
pub use auth::AuthComponent;
pub use layout::LayoutComponent;
pub use student::StudentDashboardComponent;
pub use toast::ToastComponent;
pub use wizard::WizardComponent;
