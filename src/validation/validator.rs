//! Per-field validation rules
//!
//! Every rule returns `Ok(())` or a [`FieldError`]. The string-returning
//! wrappers at the bottom are what the form controller stores in its
//! error map: an empty string means the field is valid.

use super::error::FieldError;
use super::rules::{PasswordPolicy, ValidationRules};
use crate::state::{ErrorMap, FieldName, FieldValue, FormValues, GENDER_OPTIONS};
use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Something, `@`, a domain, and at least one character after its last dot
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+\.[^.]+$").expect("email pattern compiles"));

/// `(DD) NNNN-NNNN` or `(DD) NNNNN-NNNN`, space optional, or 11 raw digits
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\([0-9]{2}\) ?[0-9]{4,5}-[0-9]{4}|[0-9]{11})$")
        .expect("phone pattern compiles")
});

static PHONE_STRICT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{2}\) [0-9]{5}-[0-9]{4}$").expect("strict phone pattern compiles")
});

static BIRTH_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>0[1-9]|[12][0-9]|3[01])/(?P<month>0[1-9]|1[0-2])/(?P<year>[0-9]{4})$")
        .expect("birth date pattern compiles")
});

static BIRTH_DATE_DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>0[1-9]|[12][0-9]|3[01])(?P<month>0[1-9]|1[0-2])(?P<year>[0-9]{4})$")
        .expect("raw birth date pattern compiles")
});

pub fn check_name(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn check_password(value: &str, rules: &ValidationRules) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    let len = value.chars().count();
    let min = rules.password_min_length;
    if len < min {
        return Err(FieldError::PasswordTooShort { min });
    }
    if rules.password_policy == PasswordPolicy::Exact && len > min {
        return Err(FieldError::PasswordLengthMismatch { len: min });
    }
    Ok(())
}

pub fn check_phone(value: &str, rules: &ValidationRules) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    let pattern = if rules.strict_masks {
        &*PHONE_STRICT_REGEX
    } else {
        &*PHONE_REGEX
    };
    if !pattern.is_match(value) {
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

/// Pull day, month and year out of a matched birth date
fn date_parts(caps: &Captures<'_>) -> Option<(u32, u32, i32)> {
    let day = caps.name("day")?.as_str().parse().ok()?;
    let month = caps.name("month")?.as_str().parse().ok()?;
    let year = caps.name("year")?.as_str().parse().ok()?;
    Some((day, month, year))
}

/// Whole years elapsed between `birth` and `today`
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn check_birth_date(
    value: &str,
    rules: &ValidationRules,
    today: NaiveDate,
) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::BirthDateRequired);
    }

    let caps = BIRTH_DATE_REGEX.captures(value).or_else(|| {
        if rules.strict_masks {
            None
        } else {
            BIRTH_DATE_DIGITS_REGEX.captures(value)
        }
    });
    let (day, month, year) = caps
        .as_ref()
        .and_then(date_parts)
        .ok_or(FieldError::InvalidBirthDate)?;

    // There is no year zero
    let birth = NaiveDate::from_ymd_opt(year, month, day)
        .filter(|_| year >= 1)
        .ok_or(FieldError::NonexistentBirthDate)?;
    if birth > today {
        return Err(FieldError::FutureBirthDate);
    }

    let min = rules.min_age_years;
    let age = age_in_years(birth, today);
    if i32::try_from(min).map_or(true, |min| age < min) {
        return Err(FieldError::BelowMinimumAge { min });
    }
    Ok(())
}

pub fn check_gender(value: &str) -> Result<(), FieldError> {
    if !GENDER_OPTIONS.contains(&value) {
        return Err(FieldError::GenderRequired);
    }
    Ok(())
}

pub fn check_comment(value: &str, rules: &ValidationRules) -> Result<(), FieldError> {
    let max = rules.comment_max_length;
    if value.chars().count() > max {
        return Err(FieldError::CommentTooLong { max });
    }
    Ok(())
}

pub fn check_terms(accepted: bool) -> Result<(), FieldError> {
    if !accepted {
        return Err(FieldError::TermsNotAccepted);
    }
    Ok(())
}

/// Run the rule registered for `field`
pub fn check_field(
    field: FieldName,
    value: &FieldValue,
    rules: &ValidationRules,
    today: NaiveDate,
) -> Result<(), FieldError> {
    let text = value.as_text();
    match field {
        FieldName::Name => check_name(text),
        FieldName::Email => check_email(text),
        FieldName::Phone => check_phone(text, rules),
        FieldName::BirthDate => check_birth_date(text, rules, today),
        FieldName::Gender => check_gender(text),
        FieldName::Password => check_password(text, rules),
        FieldName::Comment => check_comment(text, rules),
        FieldName::TermsAccepted => check_terms(value.as_flag()),
    }
}

/// Validate one field, returning its error message or `""`
pub fn validate_field(
    field: FieldName,
    value: &FieldValue,
    rules: &ValidationRules,
    today: NaiveDate,
) -> String {
    match check_field(field, value, rules, today) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Validate every field of the form
///
/// The optional comment only contributes its length rule, so an empty
/// comment never blocks a submission.
pub fn validate_form(values: &FormValues, rules: &ValidationRules, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::default();
    for field in FieldName::ALL {
        errors.set(field, validate_field(field, values.get(field), rules, today));
    }
    errors
}
