//! UI widgets.

pub mod users_table;

pub use users_table::{UsersTableState, fetch_users, poll_users_response, users_table_panel};
