//! Application state and core logic

use crate::config::QuoteConfig;
use crate::state::{input_hints, AppState, FormField, BASIC_OPTIONAL_SLOTS};
use crate::submit::{FormPostClient, SubmitError, SubmitTransport};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Transport the finished form is posted through
    transport: Arc<dyn SubmitTransport>,
    /// Result channel of the submission currently in flight
    pending: Option<oneshot::Receiver<Result<(), SubmitError>>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: &QuoteConfig) -> Result<Self> {
        let client = FormPostClient::new(config.endpoint(), config.request_timeout())?;
        tracing::info!(endpoint = %client.endpoint(), "quote form ready");
        Ok(Self::with_transport(Arc::new(client)))
    }

    pub fn with_transport(transport: Arc<dyn SubmitTransport>) -> Self {
        Self {
            state: AppState::default(),
            transport,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.state.status_message = None;

        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.start_submission();
                return Ok(());
            }
            // Other Ctrl chords are unbound and never reach the fields
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.next_form_field();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.prev_form_field();
                return Ok(());
            }
            _ => {}
        }

        match self.state.focused_field() {
            FormField::Text(_) => self.handle_text_key(key),
            FormField::Choice(_) => self.handle_choice_key(key),
            FormField::Sections => self.handle_sections_key(key),
            FormField::Submit => self.handle_submit_key(key),
        }
        Ok(())
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Enter if self.state.focused_field().is_multiline() => {
                self.state.form_newline()
            }
            KeyCode::Enter | KeyCode::Down => self.state.next_form_field(),
            KeyCode::Up => self.state.prev_form_field(),
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
                self.state.cycle_choice(true)
            }
            KeyCode::Left | KeyCode::Char('h') => self.state.cycle_choice(false),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Enter | KeyCode::Down | KeyCode::Char('j') => self.state.next_form_field(),
            KeyCode::Up | KeyCode::Char('k') => self.state.prev_form_field(),
            _ => {}
        }
    }

    fn handle_sections_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.move_section_cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => self.state.move_section_cursor_right(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_section_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_section_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_highlighted_section(),
            _ => {}
        }
    }

    fn handle_submit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.start_submission(),
            KeyCode::Up => self.state.prev_form_field(),
            _ => {}
        }
    }

    fn toggle_highlighted_section(&mut self) {
        let section = self.state.highlighted_section();
        if self.state.toggle_highlighted_section() {
            return;
        }
        // Refused by the Basic plan rules; explain why
        let form = &self.state.form;
        let message = if form.is_section_locked(section) {
            format!("{section} is required on the Basic plan")
        } else if form.is_section_capped(section) {
            format!("Basic plan allows up to {BASIC_OPTIONAL_SLOTS} optional sections")
        } else {
            format!("{section} cannot be changed")
        };
        self.state.status_message = Some(message);
    }

    /// Check the form and, if it is complete, send it in the background
    pub fn start_submission(&mut self) {
        if self.state.form.is_submitting() {
            return;
        }

        let hints = input_hints(self.state.form.state());
        if let Some(first) = hints.first() {
            self.state.focus(first.field());
            self.state.status_message = Some(first.to_string());
            return;
        }

        let Some(payload) = self.state.form.begin_submit() else {
            return;
        };
        tracing::debug!(
            plan = ?self.state.form.plan(),
            sections = self.state.form.state().sections.len(),
            "dispatching quote form"
        );

        let transport = Arc::clone(&self.transport);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = transport.submit(&payload).await;
            // The receiver is gone only if the app already exited
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
    }

    /// Fold a finished submission back into the form. Returns true when
    /// the in-flight submission completed during this call.
    pub fn poll_submission(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(abandoned()),
        };
        self.pending = None;
        self.state.form.finish_submit(result);
        true
    }

    /// Wait for the in-flight submission, if any, to complete
    #[allow(dead_code)]
    pub async fn wait_for_submission(&mut self) {
        if let Some(rx) = self.pending.take() {
            let result = rx.await.unwrap_or_else(|_| Err(abandoned()));
            self.state.form.finish_submit(result);
        }
    }
}

fn abandoned() -> SubmitError {
    SubmitError::Transport("submission task ended without a result".to_string())
}
