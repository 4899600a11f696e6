/// Player-input helpers for the setup form. Pure predicates, never errors.

/// Accepts only ASCII alphanumerics and whitespace. Rejection is a
/// user-correctable condition surfaced by the form, not an error.
pub fn validate_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
}

/// Character count of the text as typed. No trimming, no normalization.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}
