// ABOUTME: Login and registration screen with tabbed forms and masked passwords

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
    Frame,
};

use super::layout::centered_rect;
use super::theme::*;
use crate::app::{AuthField, AuthForm, AuthTab};
use crate::config::PortalConfig;

pub struct AuthComponent;

impl AuthComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, form: &AuthForm, portal: &PortalConfig) {
        let popup = centered_rect(60, 80, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} {} ", portal.title, portal.region))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Subtitle
                Constraint::Length(2), // Tabs
                Constraint::Min(8),    // Fields
                Constraint::Length(2), // Error
                Constraint::Length(3), // Demo accounts
            ])
            .split(inner);

        let subtitle = Paragraph::new(Span::styled(
            format!("New student admissions {}", portal.academic_year),
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(subtitle, layout[0]);

        let selected = match form.tab {
            AuthTab::Login => 0,
            AuthTab::Register => 1,
        };
        let tabs = Tabs::new(vec![AuthTab::Login.title(), AuthTab::Register.title()])
            .select(selected)
            .style(Style::default().fg(MUTED_GRAY))
            .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .divider(Span::styled(" │ ", Style::default().fg(SUBDUED_BORDER)));
        frame.render_widget(tabs, layout[1]);

        let focused = form.focused_field();
        let lines: Vec<Line> = form
            .tab
            .fields()
            .iter()
            .map(|field| self.field_line(form, *field, *field == focused))
            .collect();
        frame.render_widget(Paragraph::new(lines), layout[2]);

        if let Some(error) = &form.error {
            let error = Paragraph::new(Line::from(vec![
                Span::styled("✗ ", Style::default().fg(ERROR_RED)),
                Span::styled(error.clone(), Style::default().fg(ERROR_RED)),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(error, layout[3]);
        }

        let mut hints = vec![];
        hints.extend(key_hint("←→", "Login/Register"));
        hints.push(separator());
        hints.extend(key_hint("Enter", form.tab.title()));
        hints.push(separator());
        hints.extend(key_hint("Esc", "Quit"));
        let demo = Paragraph::new(vec![
            Line::from(hints),
            Line::from(Span::styled(
                "Demo: student@ppdb.jabar.go.id / admin@ppdb.jabar.go.id, password password123",
                Style::default().fg(SUBDUED_BORDER),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(demo, layout[4]);
    }

    fn field_line(&self, form: &AuthForm, field: AuthField, is_focused: bool) -> Line<'static> {
        let raw = form.value(field);
        let mut value = if field.is_secret() {
            "•".repeat(raw.chars().count())
        } else if field == AuthField::Role {
            format!("‹ {raw} ›")
        } else {
            raw.to_string()
        };
        if is_focused && field != AuthField::Role {
            value.push('│');
        }

        let label_style = if is_focused {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };

        Line::from(vec![
            Span::styled(if is_focused { "▶ " } else { "  " }, Style::default().fg(GOLD)),
            Span::styled(format!("{:<18}", field.label()), label_style),
            Span::styled(value, Style::default().fg(SOFT_WHITE)),
        ])
    }
}

impl Default for AuthComponent {
    fn default() -> Self {
        Self::new()
    }
}
