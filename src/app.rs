//! Application state and core logic

use crate::config::AppConfig;
use crate::platform::is_shortcut;
use crate::state::{AppState, Form, Submission};
use crate::submit::Submitter;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where accepted values go
    submitter: Box<dyn Submitter>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &AppConfig, submitter: Box<dyn Submitter>) -> Self {
        Self {
            state: AppState::from_config(config),
            submitter,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Success overlay swallows everything except dismissal (modal)
        if self.state.form.is_confirmation_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.form.dismiss();
                tracing::debug!("confirmation overlay dismissed");
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        self.handle_form_key(key).await
    }

    /// Handle keys while the form is being edited
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        if is_shortcut(&key, 's') {
            self.submit().await;
            return Ok(());
        }
        if is_shortcut(&key, 'r') {
            self.state.toggle_reveal_password();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Enter anywhere in the form submits it
            KeyCode::Enter => self.submit().await,
            KeyCode::Esc => self.quit = true,
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form.input_char(c)
            }
            _ => {}
        }
        Ok(())
    }

    /// Run a submit attempt and forward accepted values to the submitter
    async fn submit(&mut self) {
        let Some(values) = self.state.form.submit() else {
            tracing::debug!(
                attempts = self.state.form.submit_count,
                "submit rejected by validation"
            );
            self.state.status_message = Some("Please fix the highlighted fields".to_string());
            return;
        };

        let submission = Submission::new(values);
        if let Err(err) = self.submitter.submit(&submission).await {
            tracing::warn!("submission failed: {err:#}");
            self.push_error(format!("Failed to submit form: {err}"));
        }
    }
}
