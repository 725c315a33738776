//! Users table widget.
//!
//! This module contains the searchable, paginated users table and its
//! submodules:
//! - `state`: widget state (load outcome, search text, current page)
//! - `api`: the one-shot users fetch
//! - `panel`: panel rendering and response polling
//! - `table`: table rendering components (columns, header, row)

mod api;
mod panel;
mod state;
pub mod table;

pub use api::fetch_users;
pub use panel::{poll_users_response, users_table_panel};
pub use state::UsersTableState;
