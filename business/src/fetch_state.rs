//! Load-state machine for the one-shot users fetch.
//!
//! The fetch itself is a side effect and lives in the UI crate; this module
//! owns the state it drives. The machine is deliberately small:
//! `Loading -> Ready | Error`, settled exactly once per run.

use thiserror::Error;

use crate::user::{UserRecord, sort_users_by_name};

/// Fixed user-facing message for any load failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Please try again later.";

/// Why a load attempt failed. Logged for diagnostics, never displayed:
/// every variant collapses to [`FETCH_ERROR_MESSAGE`] on screen.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The endpoint answered with a non-200 status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The body was not a JSON array of user records.
    #[error("malformed body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// State of the single fetch issued at startup.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Request outstanding; the initial state.
    #[default]
    Loading,
    /// The request settled with a failure. Terminal for this run.
    Error(String),
    /// Records arrived, sorted ascending by name.
    Ready(Vec<UserRecord>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The user-facing message if the load failed.
    pub fn error_message(&self) -> Option<&str> {
        if let Self::Error(message) = self {
            Some(message)
        } else {
            None
        }
    }

    /// The loaded records if the fetch succeeded.
    pub fn records(&self) -> Option<&[UserRecord]> {
        if let Self::Ready(records) = self {
            Some(records)
        } else {
            None
        }
    }

    /// Settle the fetch from a raw outcome.
    ///
    /// Success sorts the records once; any failure collapses to the fixed
    /// message with the cause kept in the log.
    pub fn settle(outcome: Result<Vec<UserRecord>, FetchError>) -> Self {
        match outcome {
            Ok(mut users) => {
                log::info!("users fetch settled with {} records", users.len());
                sort_users_by_name(&mut users);
                Self::Ready(users)
            }
            Err(err) => {
                log::error!("users fetch failed: {err}");
                Self::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        }
    }
}

/// Parse a 200 response body into user records.
pub fn parse_users_body(bytes: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    Ok(serde_json::from_slice::<Vec<UserRecord>>(bytes)?)
}
