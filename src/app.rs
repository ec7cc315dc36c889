//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{
    FieldName, Form, ResetTimer, SignupForm, SubmitOutcome, BUTTON_RESET, BUTTON_SUBMIT,
    GENDER_OPTIONS,
};
use crate::validation::SystemClock;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Registration form being edited
    pub form: SignupForm,
    /// Pending auto-resets after successful submissions
    reset_timer: ResetTimer,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        let form = SignupForm::new(
            config.rules.clone(),
            config.auto_reset_delay(),
            Box::new(SystemClock),
        );
        Self::with_form(form)
    }

    pub fn with_form(form: SignupForm) -> Self {
        Self {
            form,
            reset_timer: ResetTimer::new(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply auto-resets whose delay has elapsed
    pub fn tick(&mut self) {
        for generation in self.reset_timer.due() {
            self.form.apply_scheduled_reset(generation);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return Ok(());
            }
            KeyCode::Char('r') if ctrl => {
                self.reset();
                return Ok(());
            }
            KeyCode::Tab => {
                self.leave_field();
                self.form.next_field();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.leave_field();
                self.form.prev_field();
                return Ok(());
            }
            _ => {}
        }

        // Unbound control chords never reach the fields
        if ctrl {
            return Ok(());
        }

        match self.form.active_field_name() {
            None => self.handle_actions_key(key),
            Some(FieldName::Gender) => self.handle_gender_key(key),
            Some(FieldName::TermsAccepted) => self.handle_terms_key(key),
            Some(field) => self.handle_text_key(field, key),
        }
        Ok(())
    }

    /// Blur the focused field before focus moves away
    fn leave_field(&mut self) {
        if let Some(field) = self.form.active_field_name() {
            self.form.on_field_blur(field);
        }
    }

    fn advance(&mut self) {
        self.leave_field();
        self.form.next_field();
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.form.prev_button()
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.form.next_button()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.form.selected_button {
                BUTTON_SUBMIT => self.submit(),
                BUTTON_RESET => self.reset(),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_gender_key(&mut self, key: KeyEvent) {
        let current = self.form.value(FieldName::Gender).as_text();
        let index = GENDER_OPTIONS.iter().position(|o| *o == current);
        let count = GENDER_OPTIONS.len();
        let next = match key.code {
            KeyCode::Right | KeyCode::Char(' ') => index.map_or(0, |i| (i + 1) % count),
            KeyCode::Left => index.map_or(count - 1, |i| (i + count - 1) % count),
            KeyCode::Enter => {
                self.advance();
                return;
            }
            _ => return,
        };
        self.form.on_field_change(FieldName::Gender, GENDER_OPTIONS[next]);
    }

    fn handle_terms_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => {
                let accepted = self.form.value(FieldName::TermsAccepted).as_flag();
                self.form.on_field_change(FieldName::TermsAccepted, !accepted);
            }
            KeyCode::Enter => self.advance(),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) {
        let mut text = self.form.value(field).as_text().to_string();
        match key.code {
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                if text.pop().is_none() {
                    return;
                }
            }
            // Enter in the comment field adds a newline
            KeyCode::Enter if self.form.is_active_field_multiline() => text.push('\n'),
            KeyCode::Enter => {
                self.advance();
                return;
            }
            _ => return,
        }
        self.form.on_field_change(field, text);
    }

    /// Submit the form, scheduling the auto-reset on success
    fn submit(&mut self) {
        if let SubmitOutcome::Accepted(reset) = self.form.on_submit() {
            self.reset_timer.schedule(reset);
        }
    }

    /// Explicit reset: clears the form and cancels pending auto-resets
    fn reset(&mut self) {
        self.reset_timer.cancel();
        self.form.on_reset();
    }
}
