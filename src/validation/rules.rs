//! Validation constants and policy switches

use serde::{Deserialize, Serialize};

/// How the password length bound is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordPolicy {
    /// At least `password_min_length` characters, no upper bound
    #[default]
    AtLeast,
    /// Exactly `password_min_length` characters
    Exact,
}

/// Tunable constants used by the field validators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Minimum password length in characters
    pub password_min_length: usize,
    pub password_policy: PasswordPolicy,
    /// Minimum age in whole years computed from the birth date
    pub min_age_years: u32,
    /// Maximum comment length in characters
    pub comment_max_length: usize,
    /// Accept only the masked phone/date shapes, never raw digit strings
    pub strict_masks: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            password_min_length: 6,
            password_policy: PasswordPolicy::AtLeast,
            min_age_years: 13,
            comment_max_length: 250,
            strict_masks: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = ValidationRules::default();
        assert_eq!(rules.password_min_length, 6);
        assert_eq!(rules.password_policy, PasswordPolicy::AtLeast);
        assert_eq!(rules.min_age_years, 13);
        assert_eq!(rules.comment_max_length, 250);
        assert!(!rules.strict_masks);
    }

    #[test]
    fn test_policy_uses_snake_case() {
        let json = serde_json::to_string(&PasswordPolicy::AtLeast).unwrap();
        assert_eq!(json, "\"at_least\"");
        let parsed: PasswordPolicy = serde_json::from_str("\"exact\"").unwrap();
        assert_eq!(parsed, PasswordPolicy::Exact);
    }

    #[test]
    fn test_partial_rules_fill_defaults() {
        let parsed: ValidationRules = serde_json::from_str(r#"{"min_age_years": 18}"#).unwrap();
        assert_eq!(parsed.min_age_years, 18);
        assert_eq!(parsed.password_min_length, 6);
        assert_eq!(parsed.comment_max_length, 250);
    }
}
