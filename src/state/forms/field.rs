//! Form field value objects

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Choices offered by the gender selector
pub const GENDER_OPTIONS: [&str; 3] = ["Masculine", "Feminine", "Other"];

/// Every field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    BirthDate,
    Gender,
    Password,
    Comment,
    TermsAccepted,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 8] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::BirthDate,
        FieldName::Gender,
        FieldName::Password,
        FieldName::Comment,
        FieldName::TermsAccepted,
    ];

    /// Stable identifier, used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::BirthDate => "birthDate",
            FieldName::Gender => "gender",
            FieldName::Password => "password",
            FieldName::Comment => "comment",
            FieldName::TermsAccepted => "termsAccepted",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone",
            FieldName::BirthDate => "Birth Date",
            FieldName::Gender => "Gender",
            FieldName::Password => "Password",
            FieldName::Comment => "Comment (up to 250 characters)",
            FieldName::TermsAccepted => "Terms",
        }
    }

    /// Hint shown inside an empty field
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldName::Phone => Some("(XX) XXXXX-XXXX"),
            FieldName::BirthDate => Some("dd/mm/yyyy"),
            _ => None,
        }
    }

    /// The comment is the only optional field
    pub fn is_required(self) -> bool {
        !matches!(self, FieldName::Comment)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for flags)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text)
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Current value of every field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub name: FieldValue,
    pub email: FieldValue,
    pub phone: FieldValue,
    pub birth_date: FieldValue,
    pub gender: FieldValue,
    pub password: FieldValue,
    pub comment: FieldValue,
    pub terms_accepted: FieldValue,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: FieldValue::default(),
            email: FieldValue::default(),
            phone: FieldValue::default(),
            birth_date: FieldValue::default(),
            gender: FieldValue::default(),
            password: FieldValue::default(),
            comment: FieldValue::default(),
            terms_accepted: FieldValue::Flag(false),
        }
    }
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> &FieldValue {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::BirthDate => &self.birth_date,
            FieldName::Gender => &self.gender,
            FieldName::Password => &self.password,
            FieldName::Comment => &self.comment,
            FieldName::TermsAccepted => &self.terms_accepted,
        }
    }

    pub fn set(&mut self, field: FieldName, value: FieldValue) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::BirthDate => &mut self.birth_date,
            FieldName::Gender => &mut self.gender,
            FieldName::Password => &mut self.password,
            FieldName::Comment => &mut self.comment,
            FieldName::TermsAccepted => &mut self.terms_accepted,
        };
        *slot = value;
    }
}

/// Error message per field; a missing or empty entry means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn get(&self, field: FieldName) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldName, message: String) {
        self.0.insert(field, message);
    }

    /// True when no field carries an error
    pub fn is_clear(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Fields that currently carry an error
    pub fn failed_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(field, _)| *field)
    }
}

/// Fields the user has interacted with since the last reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedFields(BTreeSet<FieldName>);

impl TouchedFields {
    pub fn touch(&mut self, field: FieldName) {
        self.0.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.0.extend(FieldName::ALL);
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.0.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let values = FormValues::default();
        for field in FieldName::ALL {
            if field == FieldName::TermsAccepted {
                assert_eq!(values.get(field), &FieldValue::Flag(false));
            } else {
                assert_eq!(values.get(field), &FieldValue::Text(String::new()));
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut values = FormValues::default();
        values.set(FieldName::Email, "a@b.c".into());
        values.set(FieldName::TermsAccepted, true.into());
        assert_eq!(values.email.as_text(), "a@b.c");
        assert!(values.get(FieldName::TermsAccepted).as_flag());
    }

    #[test]
    fn test_value_accessors_cross_types() {
        assert_eq!(FieldValue::Flag(true).as_text(), "");
        assert!(!FieldValue::Text("yes".to_string()).as_flag());
    }

    #[test]
    fn test_only_comment_is_optional() {
        let optional: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(|f| !f.is_required())
            .collect();
        assert_eq!(optional, vec![FieldName::Comment]);
    }

    #[test]
    fn test_field_names_display() {
        assert_eq!(FieldName::BirthDate.to_string(), "birthDate");
        assert_eq!(FieldName::TermsAccepted.to_string(), "termsAccepted");
    }

    #[test]
    fn test_error_map_missing_entries_are_empty() {
        let mut errors = ErrorMap::default();
        assert_eq!(errors.get(FieldName::Name), "");
        assert!(errors.is_clear());

        errors.set(FieldName::Name, String::new());
        assert!(errors.is_clear());

        errors.set(FieldName::Phone, "Invalid phone".to_string());
        assert!(!errors.is_clear());
        assert_eq!(errors.failed_fields().collect::<Vec<_>>(), vec![FieldName::Phone]);
    }

    #[test]
    fn test_touched_fields() {
        let mut touched = TouchedFields::default();
        assert!(!touched.is_touched(FieldName::Email));
        touched.touch(FieldName::Email);
        assert!(touched.is_touched(FieldName::Email));
        assert!(!touched.is_touched(FieldName::Name));
        touched.touch_all();
        assert!(FieldName::ALL.iter().all(|f| touched.is_touched(*f)));
    }
}
