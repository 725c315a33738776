//! Table rendering components for the users table.
//!
//! Split into small, focused pieces:
//! - `columns`: column definitions and row heights
//! - `header`: table header rendering
//! - `row`: individual row rendering

pub mod columns;
pub mod header;
pub mod row;
