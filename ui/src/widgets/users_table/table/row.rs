//! Row rendering for the users table.

use dyntable_business::UserRecord;
use egui::Ui;
use egui_extras::TableRow;

/// Renders a single user row: name, username, email, website.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRecord) {
    row.col(|ui| {
        render_text_cell(ui, &user.name);
    });
    row.col(|ui| {
        render_text_cell(ui, &user.username);
    });
    row.col(|ui| {
        render_text_cell(ui, &user.email);
    });
    row.col(|ui| {
        render_text_cell(ui, &user.website);
    });
}

#[inline]
fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}
