//! Unique test data, so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("row");
/// assert_ne!(a, unique_str("row"));
/// assert!(a.starts_with("row-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// A player name that fits the ranking's 64-character limit.
///
/// The prefix is cut to 37 characters so the ULID suffix always fits.
///
/// ```
/// use backend_test_support::unique_helpers::unique_player_name;
///
/// let name = unique_player_name("Ana");
/// assert!(name.starts_with("Ana-"));
/// assert!(name.chars().count() <= 64);
/// ```
pub fn unique_player_name(prefix: &str) -> String {
    let prefix: String = prefix.chars().take(37).collect();
    unique_str(&prefix)
}
