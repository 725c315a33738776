//! User records returned by the remote endpoint.

use serde::{Deserialize, Serialize};

/// A single user entity from the remote endpoint.
///
/// The payload carries more fields (address, phone, company); only the ones
/// the table displays are deserialized, the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Endpoint-assigned id, used only as a stable row key.
    pub id: u64,
    /// Display name; the field search and sort operate on.
    pub name: String,
    pub username: String,
    pub email: String,
    pub website: String,
}

/// Sort records ascending by name, case-insensitively.
///
/// Runs once when the payload arrives; the list is never re-sorted after.
/// Comparison is a Unicode lowercase fold with a byte-order tie-break so
/// the result is deterministic.
pub fn sort_users_by_name(users: &mut [UserRecord]) {
    users.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
}
