#![warn(clippy::all, rust_2018_idioms)]
//! The dynamic user table app: fetches user records once at startup,
//! then filters and paginates them client-side.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::DynamicTableApp;
