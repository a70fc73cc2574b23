//! Username and digest checks mirroring the backend's domain rules.

/// Maximum username length, matching the backend.
pub const USERNAME_MAX: usize = 32;

/// Whether `value` is a valid username: 1 to [`USERNAME_MAX`] ASCII
/// alphanumerics or underscores, without surrounding whitespace.
///
/// # Example
///
/// ```
/// use example_data::is_valid_username;
///
/// assert!(is_valid_username("ash"));
/// assert!(!is_valid_username("ash ketchum"));
/// ```
#[must_use]
pub fn is_valid_username(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= USERNAME_MAX
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn is_sha256_hex(value: &str) -> bool {
    value.len() == 64
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
