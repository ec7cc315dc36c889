//! Registration form state and event handling

use super::field::{ErrorMap, FieldName, FieldValue, FormValues, TouchedFields};
use crate::validation::{
    format_field, password_strength, strength_label, validate_field, validate_form, Clock,
    ValidationRules,
};
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "Registration completed successfully!";
pub const FAILURE_MESSAGE: &str = "Please fill in all required fields.";

/// Number of focus stops: every field plus the actions row
const FOCUS_STOPS: usize = FieldName::ALL.len() + 1;

/// Index of the actions row in the focus order
pub const ACTIONS_ROW: usize = FieldName::ALL.len();

/// Buttons on the actions row
pub const BUTTON_SUBMIT: usize = 0;
pub const BUTTON_RESET: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Field at a focus index, `None` for non-field rows
    fn get_field(&self, index: usize) -> Option<FieldName>;
}

/// Top-level feedback shown after a submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMessage {
    #[default]
    None,
    Success(String),
    Failure(String),
}

impl FormMessage {
    pub fn text(&self) -> Option<&str> {
        match self {
            FormMessage::None => None,
            FormMessage::Success(s) | FormMessage::Failure(s) => Some(s),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormMessage::Success(_))
    }
}

/// Deferred reset requested by a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReset {
    /// Form generation the reset applies to
    pub generation: u64,
    pub delay: Duration,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(ScheduledReset),
    Rejected,
}

/// The registration form: values, errors, interaction flags and focus
pub struct SignupForm {
    values: FormValues,
    errors: ErrorMap,
    touched: TouchedFields,
    submitted: bool,
    strength: u8,
    message: FormMessage,
    generation: u64,
    rules: ValidationRules,
    reset_delay: Duration,
    clock: Box<dyn Clock>,
    pub active_field_index: usize,
    /// Which button is selected when on the actions row (0=Submit, 1=Reset)
    pub selected_button: usize,
}

impl SignupForm {
    pub fn new(rules: ValidationRules, reset_delay: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            values: FormValues::default(),
            errors: ErrorMap::default(),
            touched: TouchedFields::default(),
            submitted: false,
            strength: 0,
            message: FormMessage::None,
            generation: 0,
            rules,
            reset_delay,
            clock,
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
        }
    }

    pub fn value(&self, field: FieldName) -> &FieldValue {
        self.values.get(field)
    }

    pub fn message(&self) -> &FormMessage {
        &self.message
    }

    /// Password strength score, 0 to 5
    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn strength_label(&self) -> Option<&'static str> {
        strength_label(self.strength)
    }

    /// Error to display for a field
    ///
    /// Errors stay hidden until the field has been touched or the form
    /// has been submitted.
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if !self.touched.is_touched(field) && !self.submitted {
            return None;
        }
        Some(self.errors.get(field)).filter(|msg| !msg.is_empty())
    }

    /// Whether a field has been validated and is currently shown as valid
    pub fn is_visibly_valid(&self, field: FieldName) -> bool {
        (self.touched.is_touched(field) || self.submitted) && self.errors.get(field).is_empty()
    }

    fn revalidate(&mut self, field: FieldName) -> bool {
        let today = self.clock.today();
        let message = validate_field(field, self.values.get(field), &self.rules, today);
        let valid = message.is_empty();
        self.errors.set(field, message);
        valid
    }

    /// Store a new raw value: mask it, validate it, update the strength meter
    pub fn on_field_change(&mut self, field: FieldName, raw: impl Into<FieldValue>) {
        let value = match raw.into() {
            FieldValue::Text(text) => FieldValue::Text(format_field(field, &text)),
            flag => flag,
        };
        if field == FieldName::Password {
            self.strength = password_strength(value.as_text(), self.rules.password_min_length);
        }
        self.values.set(field, value);
        self.touched.touch(field);
        let valid = self.revalidate(field);
        self.message = FormMessage::None;
        tracing::debug!(%field, valid, "field changed");
    }

    /// The user left a field
    pub fn on_field_blur(&mut self, field: FieldName) {
        self.touched.touch(field);
        let valid = self.revalidate(field);
        tracing::debug!(%field, valid, "field blurred");
    }

    /// Validate everything and report the outcome
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.submitted = true;
        self.touched.touch_all();
        self.errors = validate_form(&self.values, &self.rules, self.clock.today());

        if self.errors.is_clear() {
            self.message = FormMessage::Success(SUCCESS_MESSAGE.to_string());
            tracing::info!(generation = self.generation, "registration accepted");
            SubmitOutcome::Accepted(ScheduledReset {
                generation: self.generation,
                delay: self.reset_delay,
            })
        } else {
            self.message = FormMessage::Failure(FAILURE_MESSAGE.to_string());
            let failed: Vec<&str> = self.errors.failed_fields().map(FieldName::as_str).collect();
            tracing::info!(?failed, "registration rejected");
            SubmitOutcome::Rejected
        }
    }

    /// Restore the initial state and start a new generation
    pub fn on_reset(&mut self) {
        self.values = FormValues::default();
        self.errors = ErrorMap::default();
        self.touched = TouchedFields::default();
        self.submitted = false;
        self.strength = 0;
        self.message = FormMessage::None;
        self.generation = self.generation.wrapping_add(1);
        self.active_field_index = 0;
        self.selected_button = BUTTON_SUBMIT;
        tracing::info!(generation = self.generation, "form reset");
    }

    /// Run a deferred reset if it still belongs to the current generation
    pub fn apply_scheduled_reset(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "stale reset ignored");
            return false;
        }
        self.on_reset();
        true
    }

    /// Field that currently has focus, `None` on the actions row
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.get_field(self.active_field_index)
    }

    /// Returns true if the actions row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == ACTIONS_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field_name() == Some(FieldName::Comment)
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

// Whole-state inspection for tests
#[cfg(test)]
impl SignupForm {
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        FOCUS_STOPS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(ACTIONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<FieldName> {
        FieldName::ALL.get(index).copied()
    }
}
