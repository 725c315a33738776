//! Panel rendering and response polling for the users table.

use dyntable_business::LoadState;
use egui::{Color32, RichText, Ui};
use egui_extras::TableBuilder;

use super::api::USERS_RESPONSE_ID;
use super::state::UsersTableState;
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::render_user_row;

/// Displays the users table panel.
///
/// The three load states are mutually exclusive, in priority order
/// Loading -> Error -> Ready; the search box and table only exist in Ready.
pub fn users_table_panel(state: &mut UsersTableState, ui: &mut Ui) {
    if state.load.is_loading() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.spinner();
            ui.label(RichText::new("Data Loading...").strong());
        });
        return;
    }

    if let Some(message) = state.load.error_message() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.colored_label(Color32::RED, message);
        });
        return;
    }

    ui.vertical_centered(|ui| {
        ui.heading("Dynamic Table");
    });
    ui.add_space(8.0);

    ui.add(
        egui::TextEdit::singleline(&mut state.search)
            .hint_text("Search by name")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    // Collect navigation clicks first, apply after the view borrow ends.
    let mut go_prev = false;
    let mut go_next = false;
    let total_pages;
    {
        let view = state.view();
        total_pages = view.total_pages;

        let mut builder = TableBuilder::new(ui).striped(true);
        for column in table_columns() {
            builder = builder.column(column);
        }
        builder
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header);
            })
            .body(|mut body| {
                for user in &view.page_rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        render_user_row(&mut row, user);
                    });
                }
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(view.prev_enabled(), egui::Button::new("Previous"))
                .clicked()
            {
                go_prev = true;
            }
            ui.label(format!("Page {} of {}", view.current_page, view.total_pages));
            if ui
                .add_enabled(view.next_enabled(), egui::Button::new("Next"))
                .clicked()
            {
                go_next = true;
            }
        });
    }

    if go_prev {
        state.prev_page();
    }
    if go_next {
        state.next_page(total_pages);
    }
}

/// Poll for the settled fetch outcome and apply it.
/// Call this in the update loop every frame.
pub fn poll_users_response(state: &mut UsersTableState, ctx: &egui::Context) {
    if let Some(settled) = ctx.memory(|mem| {
        mem.data
            .get_temp::<LoadState>(egui::Id::new(USERS_RESPONSE_ID))
    }) {
        state.load = settled;
        ctx.memory_mut(|mem| {
            mem.data.remove::<LoadState>(egui::Id::new(USERS_RESPONSE_ID));
        });
    }
}
