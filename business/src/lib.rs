//! UI-free logic for the dynamic user table.
//!
//! This crate holds everything the table does that is not rendering:
//! - `user`: the record type returned by the remote endpoint and its sort
//! - `config`: where to fetch the records from
//! - `fetch_state`: the load-state machine the startup fetch drives
//! - `view`: the pure filter/paginate derivation run every frame

mod config;
mod fetch_state;
mod user;
mod view;

pub use config::TableConfig;
pub use fetch_state::{FETCH_ERROR_MESSAGE, FetchError, LoadState, parse_users_body};
pub use user::{UserRecord, sort_users_by_name};
pub use view::{ROWS_PER_PAGE, TableView};
