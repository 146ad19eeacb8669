// ABOUTME: Student dashboard: summary counts, own applications, notifications and documents

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use super::theme::*;
use crate::app::{AppState, StudentTab};
use crate::applications::{Application, ApplicationStatus};

pub struct StudentDashboardComponent;

impl StudentDashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Summary counts
                Constraint::Length(2), // Tabs
                Constraint::Min(6),    // Tab content
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let mine = state.my_applications();
        self.render_summary(frame, layout[0], &mine);

        let titles: Vec<&str> = StudentTab::all().iter().map(|t| t.title()).collect();
        let selected = StudentTab::all()
            .iter()
            .position(|t| *t == state.student.tab)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(MUTED_GRAY))
            .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, layout[1]);

        match state.student.tab {
            StudentTab::Applications => self.render_applications(frame, layout[2], state, &mine),
            StudentTab::Notifications => self.render_notifications(frame, layout[2], &mine),
            StudentTab::Documents => {
                self.render_documents(frame, layout[2], state.selected_student_application())
            }
        }

        let mut hints = vec![];
        hints.extend(key_hint("n", "New application"));
        hints.push(separator());
        hints.extend(key_hint("Tab", "Switch tab"));
        hints.push(separator());
        hints.extend(key_hint("↑↓", "Select"));
        hints.push(separator());
        hints.extend(key_hint("l", "Logout"));
        hints.push(separator());
        hints.extend(key_hint("q", "Quit"));
        frame.render_widget(Paragraph::new(Line::from(hints)).alignment(Alignment::Center), layout[3]);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, mine: &[&Application]) {
        let count = |status: ApplicationStatus| mine.iter().filter(|a| a.status == status).count();
        let summary = Line::from(vec![
            Span::styled("Total ", Style::default().fg(MUTED_GRAY)),
            Span::styled(mine.len().to_string(), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            separator(),
            Span::styled("Pending ", Style::default().fg(MUTED_GRAY)),
            Span::styled(count(ApplicationStatus::Pending).to_string(), Style::default().fg(WARNING_YELLOW)),
            separator(),
            Span::styled("Under review ", Style::default().fg(MUTED_GRAY)),
            Span::styled(count(ApplicationStatus::Review).to_string(), Style::default().fg(CORNFLOWER_BLUE)),
            separator(),
            Span::styled("Accepted ", Style::default().fg(MUTED_GRAY)),
            Span::styled(count(ApplicationStatus::Accepted).to_string(), Style::default().fg(SELECTION_GREEN)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        frame.render_widget(Paragraph::new(summary).block(block).alignment(Alignment::Center), area);
    }

    fn render_applications(&self, frame: &mut Frame, area: Rect, state: &AppState, mine: &[&Application]) {
        let block = panel(" My Applications ");

        if mine.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No applications yet.", Style::default().fg(MUTED_GRAY))),
                Line::from(Span::styled("Press n to start registration.", Style::default().fg(GOLD))),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let selected = state.student.selected.min(mine.len() - 1);
        let items: Vec<ListItem> = mine
            .iter()
            .enumerate()
            .map(|(idx, app)| {
                let marker = if idx == selected { "▶ " } else { "  " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(GOLD)),
                        Span::styled(format!("{} ", app.id), Style::default().fg(CORNFLOWER_BLUE)),
                        Span::styled(format!("{} - {}  ", app.school, app.program), Style::default().fg(SOFT_WHITE)),
                        status_span(app.status),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "    submitted {}  documents {}/{} complete",
                            app.submitted_at.format("%Y-%m-%d"),
                            app.documents.completed(),
                            app.documents.total()
                        ),
                        Style::default().fg(MUTED_GRAY),
                    )),
                ])
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, mine: &[&Application]) {
        let items: Vec<ListItem> = mine
            .iter()
            .flat_map(|app| app.notifications())
            .map(|note| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", note.kind.icon()),
                            Style::default().fg(notification_color(note.kind)),
                        ),
                        Span::styled(note.title, Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(format!("  {}", note.message), Style::default().fg(MUTED_GRAY))),
                ])
            })
            .collect();

        if items.is_empty() {
            let empty = Paragraph::new(Span::styled("Nothing new.", Style::default().fg(MUTED_GRAY)))
                .alignment(Alignment::Center)
                .block(panel(" Notifications "));
            frame.render_widget(empty, area);
        } else {
            frame.render_widget(List::new(items).block(panel(" Notifications ")), area);
        }
    }

    fn render_documents(&self, frame: &mut Frame, area: Rect, application: Option<&Application>) {
        let Some(app) = application else {
            let empty = Paragraph::new(Span::styled(
                "Documents are tracked once an application is submitted.",
                Style::default().fg(MUTED_GRAY),
            ))
            .alignment(Alignment::Center)
            .block(panel(" Documents "));
            frame.render_widget(empty, area);
            return;
        };

        let items: Vec<ListItem> = app
            .documents
            .entries()
            .iter()
            .map(|entry| {
                let required = if entry.kind.is_required() { "required" } else { "optional" };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {:<46}", entry.kind.label()), Style::default().fg(SOFT_WHITE)),
                    Span::styled(format!("{required:<10}"), Style::default().fg(MUTED_GRAY)),
                    document_span(entry.state),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(panel(&format!(" Documents for {} ", app.id))), area);
    }
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CORNFLOWER_BLUE))
        .style(Style::default().bg(PANEL_BG))
        .title(title.to_string())
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
}

impl Default for StudentDashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
