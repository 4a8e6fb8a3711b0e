//! Sign-in screen rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const BANNER_TITLE: &str = "Auth form";
pub const BANNER_INFO: &str = "Sign in to continue or create account";
pub const FORM_TITLE: &str = "Sign in";

/// Draw the sign-in screen: banner on the left, form on the right
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Banner
            Constraint::Percentage(60), // Form
        ])
        .split(area);

    draw_banner(frame, columns[0]);
    draw_form(frame, columns[1], app);
}

fn draw_banner(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically center the three banner lines
    let top = inner.height.saturating_sub(3) / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top), Constraint::Min(0)])
        .split(inner);

    let content = vec![
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                BANNER_TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            BANNER_INFO,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let banner = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, rows[1]);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(Span::styled(
            format!(" {FORM_TITLE} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // E-mail
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(BUTTON_HEIGHT), // Sign in
            Constraint::Length(1),             // Spacer
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let focused = form.focused_field();
    draw_field(
        frame,
        chunks[0],
        &form.email,
        focused == Some(FieldName::Email),
        false,
    );
    draw_field(
        frame,
        chunks[1],
        &form.password,
        focused == Some(FieldName::Password),
        app.state.reveal_password,
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[2])[0];
    render_button(frame, button_area, FORM_TITLE, form.is_submit_focused());

    let reveal_label = if app.state.reveal_password {
        "hide password"
    } else {
        "show password"
    };
    draw_help_text(
        frame,
        chunks[4],
        &[
            ("Tab", "next"),
            ("Enter", "sign in"),
            (SUBMIT_SHORTCUT, "sign in"),
            (REVEAL_SHORTCUT, reveal_label),
            ("Esc", "quit"),
        ],
    );
}
