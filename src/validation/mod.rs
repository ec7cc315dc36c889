//! Field formatting and validation engine
//!
//! - `formatter`: phone and birth date input masks
//! - `validator`: per-field rules and whole-form validation
//! - `strength`: password strength meter
//! - `rules`: tunable constants and policy switches
//! - `clock`: source of "today" for the age check

mod clock;
mod error;
mod formatter;
mod rules;
mod strength;
mod validator;

pub use clock::{Clock, SystemClock};
pub use formatter::format_field;
pub use rules::ValidationRules;
pub use strength::{password_strength, strength_label, MAX_STRENGTH};
pub use validator::{validate_field, validate_form};

#[cfg(test)]
pub use clock::MockClock;
#[cfg(test)]
pub use rules::PasswordPolicy;
