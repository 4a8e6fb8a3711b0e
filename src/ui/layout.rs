//! Status bar rendering

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom row for the status bar
pub fn split_status_bar(area: Rect) -> (Rect, Rect) {
    let status_height = area.height.min(1);
    let main = Rect {
        height: area.height - status_height,
        ..area
    };
    let status = Rect {
        y: area.y + main.height,
        height: status_height,
        ..area
    };
    (main, status)
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![];

    let (marker, state_label) = if form.is_confirmation_visible() {
        (
            Span::styled(" ● ", Style::default().fg(Color::Green)),
            "confirmation",
        )
    } else {
        (
            Span::styled(" ○ ", Style::default().fg(Color::Yellow)),
            "editing",
        )
    };
    spans.push(marker);
    spans.push(Span::styled(state_label, Style::default().fg(Color::White)));

    if form.submit_count > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("failed attempts: {}", form.submit_count),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let hint_area = Rect {
            x: area.x + area.width - hint_width,
            width: hint_width,
            ..area
        };
        let hint = Paragraph::new(quit_hint)
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}
