//! Application state definitions

use super::forms::LoginForm;
use crate::config::AppConfig;
use std::collections::VecDeque;

/// Everything the renderer needs to draw a frame
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The sign-in form session
    pub form: LoginForm,
    /// Whether the password field is drawn in clear text
    pub reveal_password: bool,
    /// Application errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state from user configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let form = LoginForm::new()
            .with_confirmation_visible(config.show_confirmation_on_start())
            .with_validation_modes(config.validation_mode(), config.revalidate_mode());

        Self {
            form,
            reveal_password: config.reveal_password.unwrap_or(false),
            error_queue: VecDeque::new(),
            status_message: None,
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn toggle_reveal_password(&mut self) {
        self.reveal_password = !self.reveal_password;
    }
}
