//! Endpoint configuration for the users table.

/// Where the table fetches its user records from.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Full URL of the users endpoint.
    pub users_url: String,
}

impl TableConfig {
    /// Point the table at a different base URL (tests use a mock server).
    pub fn new(base_url: String) -> Self {
        Self {
            users_url: format!("{base_url}/users"),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            users_url: "https://jsonplaceholder.typicode.com/users".to_string(),
        }
    }
}
