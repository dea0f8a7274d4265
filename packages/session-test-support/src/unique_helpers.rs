//! Test helpers for generating unique test data
//!
//! Room and user identities are opaque host-issued strings; these helpers
//! generate ULID-suffixed values so tests stay isolated from each other even
//! when they share a host fake.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Arguments
/// * `prefix` - The prefix to use for the unique string
///
/// # Returns
/// A unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use session_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("user");
/// let id2 = unique_str("user");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique room identity
pub fn unique_room_id() -> String {
    unique_str("room")
}

/// Generate a unique user identity
pub fn unique_user_id() -> String {
    unique_str("user")
}
