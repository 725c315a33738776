use dyntable_business::TableConfig;

use crate::widgets::UsersTableState;

/// The main application state.
#[derive(Default)]
pub struct State {
    /// Endpoint configuration.
    pub config: TableConfig,
    /// Users table widget state.
    pub table: UsersTableState,
}

impl State {
    /// State pointed at a test server (wiremock in integration tests).
    pub fn test(base_url: String) -> Self {
        Self {
            config: TableConfig::new(base_url),
            table: UsersTableState::default(),
        }
    }
}
