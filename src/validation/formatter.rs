//! Input masks for phone and birth date fields

use crate::state::FieldName;

/// Maximum digits kept in a phone number (2 area code + 9 local)
pub const PHONE_MAX_DIGITS: usize = 11;

/// Maximum digits kept in a birth date (DDMMYYYY)
pub const BIRTH_DATE_MAX_DIGITS: usize = 8;

/// Keep only ASCII digits, at most `max` of them
fn digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Mask a phone number as `(DD) NNNNN-NNNN`
///
/// Partial input is masked progressively: up to 2 digits are returned
/// untouched, up to 7 become `(DD) N...`, anything longer gets the dash.
pub fn format_phone(raw: &str) -> String {
    let digits = digits(raw, PHONE_MAX_DIGITS);
    // Slicing by byte index is fine, every char is an ASCII digit.
    match digits.len() {
        0..=2 => digits,
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Mask a birth date as `DD/MM/YYYY`
pub fn format_birth_date(raw: &str) -> String {
    let digits = digits(raw, BIRTH_DATE_MAX_DIGITS);
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Apply the field's mask, or pass the input through unchanged
pub fn format_field(field: FieldName, raw: &str) -> String {
    match field {
        FieldName::Phone => format_phone(raw),
        FieldName::BirthDate => format_birth_date(raw),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        s.chars().filter(char::is_ascii_digit).collect()
    }

    mod phone {
        use super::*;

        #[test]
        fn test_empty_input() {
            assert_eq!(format_phone(""), "");
        }

        #[test]
        fn test_area_code_only() {
            assert_eq!(format_phone("1"), "1");
            assert_eq!(format_phone("11"), "11");
        }

        #[test]
        fn test_local_prefix() {
            assert_eq!(format_phone("119"), "(11) 9");
            assert_eq!(format_phone("1198765"), "(11) 98765");
        }

        #[test]
        fn test_full_number() {
            assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        }

        #[test]
        fn test_partial_suffix() {
            assert_eq!(format_phone("11987654"), "(11) 98765-4");
        }

        #[test]
        fn test_truncates_extra_digits() {
            assert_eq!(format_phone("1198765432199"), "(11) 98765-4321");
        }

        #[test]
        fn test_reformats_masked_input() {
            // Typing after an existing mask feeds the whole string back in
            assert_eq!(format_phone("(11) 98765-43210"), "(11) 98765-4321");
            assert_eq!(format_phone("(11) 9876"), "(11) 9876");
        }

        #[test]
        fn test_ignores_non_digits() {
            assert_eq!(format_phone("abc"), "");
            assert_eq!(format_phone("+55 ab 1"), "(55) 1");
        }

        #[test]
        fn test_preserves_digits_in_order() {
            let source = "98765432109";
            for len in 0..=source.len() {
                let input = &source[..len];
                assert_eq!(strip(&format_phone(input)), input, "input {input:?}");
            }
        }
    }

    mod birth_date {
        use super::*;

        #[test]
        fn test_day_only() {
            assert_eq!(format_birth_date(""), "");
            assert_eq!(format_birth_date("0"), "0");
            assert_eq!(format_birth_date("01"), "01");
        }

        #[test]
        fn test_day_and_month() {
            assert_eq!(format_birth_date("010"), "01/0");
            assert_eq!(format_birth_date("0101"), "01/01");
        }

        #[test]
        fn test_full_date() {
            assert_eq!(format_birth_date("01012020"), "01/01/2020");
        }

        #[test]
        fn test_partial_year() {
            assert_eq!(format_birth_date("01012"), "01/01/2");
        }

        #[test]
        fn test_truncates_extra_digits() {
            assert_eq!(format_birth_date("0101202099"), "01/01/2020");
        }

        #[test]
        fn test_semantically_invalid_is_still_formatted() {
            assert_eq!(format_birth_date("9999"), "99/99");
        }
    }

    #[test]
    fn test_unmasked_fields_pass_through() {
        assert_eq!(format_field(FieldName::Name, "Ana (1)"), "Ana (1)");
        assert_eq!(format_field(FieldName::Comment, "12/34"), "12/34");
        assert_eq!(format_field(FieldName::Phone, "11987654321"), "(11) 98765-4321");
    }
}
