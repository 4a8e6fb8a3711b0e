//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::split_status_bar(frame.area());

    forms::draw_login(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlays, topmost last
    if app.state.form.is_confirmation_visible() {
        components::render_success_dialog(frame);
    }
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
