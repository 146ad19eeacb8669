// ABOUTME: Shared color palette and small styling helpers for every screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::applications::{ApplicationStatus, DocumentState};
use crate::notify::NotificationKind;

// Premium color palette (TUI Style Guide)
pub const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
pub const ERROR_RED: Color = Color::Rgb(220, 80, 80);
pub const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

/// `[key] label` hint as used in footers
pub fn key_hint(key: &str, label: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
        Span::styled(key.to_string(), Style::default().fg(GOLD)),
        Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
        Span::styled(format!(" {label}"), Style::default().fg(MUTED_GRAY)),
    ]
}

pub fn separator() -> Span<'static> {
    Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER))
}

pub fn status_color(status: ApplicationStatus) -> Color {
    match status {
        ApplicationStatus::Pending => WARNING_YELLOW,
        ApplicationStatus::Review => CORNFLOWER_BLUE,
        ApplicationStatus::Accepted => SELECTION_GREEN,
        ApplicationStatus::Rejected => ERROR_RED,
    }
}

pub fn status_span(status: ApplicationStatus) -> Span<'static> {
    Span::styled(
        status.label(),
        Style::default().fg(status_color(status)).add_modifier(Modifier::BOLD),
    )
}

pub fn document_span(state: DocumentState) -> Span<'static> {
    let (icon, color) = match state {
        DocumentState::Uploaded => ("✓", SELECTION_GREEN),
        DocumentState::Pending => ("◷", WARNING_YELLOW),
        DocumentState::NotUploaded => ("✗", ERROR_RED),
    };
    Span::styled(format!("{icon} {}", state.label()), Style::default().fg(color))
}

pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => SELECTION_GREEN,
        NotificationKind::Info => CORNFLOWER_BLUE,
        NotificationKind::Warning => WARNING_YELLOW,
        NotificationKind::Error => ERROR_RED,
    }
}
