//! The one-shot users fetch.

use dyntable_business::{FetchError, LoadState, parse_users_body};
use log::info;

/// Temp-memory id the settled [`LoadState`] is parked under until
/// `poll_users_response` picks it up.
pub(crate) const USERS_RESPONSE_ID: &str = "users_response";

/// Fetch the user records once from the given endpoint.
///
/// The completion callback settles the outcome into a [`LoadState`], stores
/// it in egui temp memory and requests a repaint; `poll_users_response`
/// applies it on the next frame. If the app is gone by the time the
/// response lands, the write is inert, so a late response cannot touch
/// live state.
pub fn fetch_users(users_url: &str, ctx: egui::Context) {
    info!("fetching users from {users_url}");
    let request = ehttp::Request::get(users_url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let outcome = match result {
            Ok(response) if response.status == 200 => parse_users_body(&response.bytes),
            Ok(response) => Err(FetchError::Status(response.status)),
            Err(err) => Err(FetchError::Transport(err)),
        };
        let settled = LoadState::settle(outcome);
        ctx.memory_mut(|mem| {
            mem.data
                .insert_temp(egui::Id::new(USERS_RESPONSE_ID), settled);
        });
    });
}
