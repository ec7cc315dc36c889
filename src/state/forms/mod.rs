//! Form domain layer
//!
//! Field value objects and the registration form controller.

mod field;
mod form_state;

pub use field::{ErrorMap, FieldName, FieldValue, FormValues, GENDER_OPTIONS};
pub use form_state::{
    Form, ScheduledReset, SignupForm, SubmitOutcome, BUTTON_RESET, BUTTON_SUBMIT,
};

#[cfg(test)]
pub use form_state::{FormMessage, ACTIONS_ROW};
