//! Password strength meter

/// Labels for scores 1 through 5
pub const STRENGTH_LABELS: [&str; 5] = ["Very weak", "Weak", "Medium", "Strong", "Very strong"];

/// Highest possible score
pub const MAX_STRENGTH: u8 = 5;

/// Count how many complexity criteria the password satisfies
///
/// Criteria: length of at least `min_length` characters, an ASCII
/// uppercase letter, an ASCII lowercase letter, an ASCII digit, and any
/// character that is not an ASCII letter or digit.
pub fn password_strength(password: &str, min_length: usize) -> u8 {
    let checks = [
        password.chars().count() >= min_length,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|&&ok| ok).count() as u8
}

/// Label for a score, `None` for 0
pub fn strength_label(score: u8) -> Option<&'static str> {
    let index = usize::from(score).checked_sub(1)?;
    STRENGTH_LABELS.get(index).copied()
}
