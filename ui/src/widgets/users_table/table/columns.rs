//! Column definitions for the users table.

use egui_extras::Column;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration.
///
/// All four columns share the remaining width; email gets the largest
/// minimum since addresses run long.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(140.0), // Name
        Column::remainder().at_least(100.0), // Username
        Column::remainder().at_least(160.0), // Email
        Column::remainder().at_least(120.0), // Website
    ]
}
