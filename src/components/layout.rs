// ABOUTME: Top-level layout: header bar, the active view, and the toast overlay

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::*;
use super::{
    AdminDashboardComponent, AuthComponent, StudentDashboardComponent, ToastComponent,
    WizardComponent,
};
use crate::app::{AppState, AppView};

pub struct LayoutComponent {
    auth: AuthComponent,
    wizard: WizardComponent,
    student: StudentDashboardComponent,
    admin: AdminDashboardComponent,
    toast: ToastComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            auth: AuthComponent::new(),
            wizard: WizardComponent::new(),
            student: StudentDashboardComponent::new(),
            admin: AdminDashboardComponent::new(),
            toast: ToastComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_header(frame, chunks[0], state);

        match state.view {
            AppView::Auth => {
                self.auth.render(frame, chunks[1], &state.auth_form, &state.config.portal)
            }
            AppView::StudentDashboard => self.student.render(frame, chunks[1], state),
            AppView::AdminDashboard => self.admin.render(frame, chunks[1], state),
            AppView::ApplicationForm => match &state.wizard {
                Some(wizard) => self.wizard.render(frame, chunks[1], wizard),
                None => tracing::warn!("Application form view without an active wizard"),
            },
        }

        // Toasts go last so they sit above everything else
        self.toast.render(frame, area, &state.toasts);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let portal = &state.config.portal;
        let mut spans = vec![
            Span::styled("🎓 ", Style::default()),
            Span::styled(
                portal.title.clone(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} {}", portal.region, portal.academic_year),
                Style::default().fg(MUTED_GRAY),
            ),
            separator(),
            Span::styled(state.view.title(), Style::default().fg(CORNFLOWER_BLUE)),
        ];

        if let Some(account) = &state.session {
            spans.push(separator());
            spans.push(Span::styled(account.name.clone(), Style::default().fg(SOFT_WHITE)));
            spans.push(Span::styled(
                format!(" ({})", account.role),
                Style::default().fg(MUTED_GRAY),
            ));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(header, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Rect of `percent_x` by `percent_y` centered inside `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
