// ABOUTME: Transient notifications stacked in the top-right corner

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::{notification_color, PANEL_BG};
use crate::notify::ToastQueue;

const TOAST_WIDTH: u16 = 50;
const TOAST_HEIGHT: u16 = 3;

pub struct ToastComponent;

impl ToastComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
        if toasts.is_empty() {
            return;
        }

        let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
        let x = area.x + area.width.saturating_sub(width + 2);
        let bottom = area.y + area.height;

        // Newest on top
        for (i, toast) in toasts.visible().rev().enumerate() {
            let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > bottom {
                break;
            }

            let slot = Rect {
                x,
                y,
                width,
                height: TOAST_HEIGHT,
            };
            let color = notification_color(toast.kind);
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", toast.kind.icon()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(toast.message.clone(), Style::default().fg(color)),
            ]);

            let widget = Paragraph::new(line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(PANEL_BG)),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(Clear, slot);
            frame.render_widget(widget, slot);
        }
    }
}

impl Default for ToastComponent {
    fn default() -> Self {
        Self::new()
    }
}
