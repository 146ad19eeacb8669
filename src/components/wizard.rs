// ABOUTME: Registration wizard screen
// Header with step dots and progress gauge, the current step's fields, and a navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::theme::*;
use crate::app::WizardForm;
use crate::models::{choice_label, Field, FieldKind};
use crate::wizard::WizardStep;

pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, form: &WizardForm) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Header with progress
                Constraint::Min(10),   // Step fields
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], form);
        self.render_fields(frame, layout[1], form);
        self.render_navigation(frame, layout[2], form);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, form: &WizardForm) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Step dots
                Constraint::Length(1), // Gauge
            ])
            .split(inner);

        let step = form.step();
        let title = Paragraph::new(Line::from(vec![
            Span::styled("📝 ", Style::default()),
            Span::styled(
                "Registration Form",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  step {} of {}", step.number(), WizardStep::total()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], step);

        let ratio = form.controller.progress_fraction().clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(SELECTION_GREEN).bg(SUBDUED_BORDER))
            .ratio(ratio)
            .label(format!("{:.0}%", ratio * 100.0));
        frame.render_widget(gauge, header_layout[2]);
    }

    /// Step dots: done, current, upcoming
    fn render_progress(&self, frame: &mut Frame, area: Rect, current: WizardStep) {
        let steps = WizardStep::all();
        let current_idx = current.number() - 1;

        let mut spans = vec![Span::styled("  ", Style::default())];
        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect, form: &WizardForm) {
        let step = form.step();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.title()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(step.description(), Style::default().fg(MUTED_GRAY))),
            Line::from(""),
        ];

        let selected = form.selected_field();
        for field in step.fields() {
            lines.push(self.field_line(form, *field, *field == selected));
            if let Some(problem) = form.problem(*field) {
                lines.push(Line::from(vec![
                    Span::styled("      ⚠ ", Style::default().fg(ERROR_RED)),
                    Span::styled(
                        format!("{} {}", field.label(), problem),
                        Style::default().fg(ERROR_RED),
                    ),
                ]));
            }
        }

        // Problems from other steps surface after a failed submit
        if let Some(errors) = &form.errors {
            let elsewhere: Vec<&str> = errors
                .fields()
                .into_iter()
                .filter(|f| !step.fields().contains(f))
                .map(|f| f.label())
                .collect();
            if !elsewhere.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Fix on earlier steps: {}", elsewhere.join(", ")),
                    Style::default().fg(WARNING_YELLOW),
                )));
            }
        }

        let content = Paragraph::new(lines).wrap(Wrap { trim: false });
        let content_area = Rect {
            x: inner.x + 2,
            y: inner.y + 1,
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(1),
        };
        frame.render_widget(content, content_area);
    }

    fn field_line(&self, form: &WizardForm, field: Field, is_selected: bool) -> Line<'static> {
        let marker = if is_selected { "▶ " } else { "  " };
        let required = if field.is_required() { "*" } else { " " };
        let label_style = if is_selected {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };

        let raw = form.controller.value(field);
        let typed = form.accepts_text(field);
        let value = match field.kind() {
            FieldKind::Flag => {
                if form.controller.draft().is_filled(field) {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            FieldKind::Choice if !typed && !raw.is_empty() => {
                format!("‹ {} ›", choice_label(field, &raw))
            }
            FieldKind::Choice if !typed => "‹ select ›".to_string(),
            _ if is_selected => format!("{raw}│"),
            _ => raw.to_string(),
        };

        let value_span = if raw.is_empty() && field.kind() != FieldKind::Flag && !is_selected {
            Span::styled(field.placeholder().to_string(), Style::default().fg(SUBDUED_BORDER))
        } else {
            let color = if form.problem(field).is_some() { ERROR_RED } else { SOFT_WHITE };
            Span::styled(value, Style::default().fg(color))
        };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(GOLD)),
            Span::styled(format!("{:<32}", format!("{}{}", field.label(), required)), label_style),
            value_span,
        ])
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect, form: &WizardForm) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled("  ", Style::default())];
        if form.controller.can_retreat() {
            spans.extend(key_hint("PgUp", "Back"));
            spans.push(separator());
        }
        let next = if form.controller.is_final_step() { "Submit" } else { "Next" };
        spans.extend(key_hint("Enter", next));
        spans.push(separator());
        spans.extend(key_hint("Tab/↑↓", "Field"));
        spans.push(separator());
        spans.extend(key_hint("←→", "Choose"));
        spans.push(separator());
        spans.extend(key_hint("Esc", "Cancel"));

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), inner);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}
