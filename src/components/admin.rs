// ABOUTME: Admin dashboard: filter bar, applications table and status actions

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::theme::*;
use crate::app::AppState;

const ROW_HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);

pub struct AdminDashboardComponent;

impl AdminDashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter bar
                Constraint::Min(6),    // Table
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        self.render_filters(frame, layout[0], state);
        self.render_table(frame, layout[1], state);
        self.render_hints(frame, layout[2], state);
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let filter = &state.admin.filter;
        let search_style = if state.admin.search_mode {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        let mut search = filter.search.clone();
        if state.admin.search_mode {
            search.push('│');
        } else if search.is_empty() {
            search.push_str("name, NISN or ID");
        }

        let status = filter.status.map_or("All", |s| s.label());
        let school = filter.school.as_deref().unwrap_or("All schools");

        let line = Line::from(vec![
            Span::styled("🔍 ", Style::default()),
            Span::styled(search, search_style),
            separator(),
            Span::styled("Status: ", Style::default().fg(MUTED_GRAY)),
            Span::styled(status, Style::default().fg(CORNFLOWER_BLUE)),
            separator(),
            Span::styled("School: ", Style::default().fg(MUTED_GRAY)),
            Span::styled(school.to_string(), Style::default().fg(CORNFLOWER_BLUE)),
            separator(),
            Span::styled(
                format!(
                    "Showing {} of {}",
                    state.filtered_applications().len(),
                    state.applications.len()
                ),
                Style::default().fg(MUTED_GRAY),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if state.admin.search_mode { GOLD } else { SUBDUED_BORDER }))
            .style(Style::default().bg(PANEL_BG));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(DARK_BG))
            .title(" Applications ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let filtered = state.filtered_applications();
        if filtered.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No applications match the current filters.",
                Style::default().fg(MUTED_GRAY),
            ))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["ID", "Name", "NISN", "School", "Program", "Grade", "Status"])
            .style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = filtered
            .iter()
            .map(|app| {
                Row::new(vec![
                    Cell::from(app.id.clone()).style(Style::default().fg(CORNFLOWER_BLUE)),
                    Cell::from(app.student_name.clone()),
                    Cell::from(app.nisn.clone()),
                    Cell::from(app.school.clone()),
                    Cell::from(app.program.clone()),
                    Cell::from(app.average_grade.clone()),
                    Cell::from(status_span(app.status)),
                ])
                .style(Style::default().fg(SOFT_WHITE))
            })
            .collect();

        let widths = [
            Constraint::Length(8),
            Constraint::Percentage(22),
            Constraint::Length(12),
            Constraint::Percentage(24),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(14),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(Style::default().bg(ROW_HIGHLIGHT_BG).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut table_state = TableState::default();
        table_state.select(Some(state.admin.selected.min(filtered.len() - 1)));
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut hints = vec![];
        if state.admin.search_mode {
            hints.extend(key_hint("Enter/Esc", "Done"));
            hints.push(separator());
            hints.extend(key_hint("Bksp", "Delete"));
        } else {
            hints.extend(key_hint("/", "Search"));
            hints.extend(key_hint(" s", "Status"));
            hints.extend(key_hint(" f", "School"));
            hints.extend(key_hint(" c", "Clear"));
            hints.push(separator());
            hints.extend(key_hint("p", "Pending"));
            hints.extend(key_hint(" r", "Review"));
            hints.extend(key_hint(" a", "Accept"));
            hints.extend(key_hint(" x", "Reject"));
            hints.push(separator());
            hints.extend(key_hint("R", "Reload"));
            hints.extend(key_hint(" l", "Logout"));
            hints.extend(key_hint(" q", "Quit"));
        }
        frame.render_widget(Paragraph::new(Line::from(hints)).alignment(Alignment::Center), area);
    }
}

impl Default for AdminDashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
