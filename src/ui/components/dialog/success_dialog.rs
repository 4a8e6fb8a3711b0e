//! Success overlay shown after the form was accepted

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

pub const SUCCESS_TITLE: &str = "✔ Success";
pub const SUCCESS_MESSAGE: &str = "You have signed in successfully.\nThe form has been cleared.";

/// Render the success overlay centered on the screen
pub fn render_success_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: SUCCESS_TITLE,
            title_color: Color::Green,
            border_color: Color::Green,
            message: SUCCESS_MESSAGE,
            hint: Some(dismiss_hint()),
            max_width: 50,
        },
    );
}
