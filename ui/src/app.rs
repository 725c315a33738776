use crate::{state::State, widgets};

pub struct DynamicTableApp {
    pub state: State,
    /// Guards the one-shot startup fetch.
    fetch_started: bool,
}

impl DynamicTableApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            fetch_started: false,
        }
    }
}

impl Default for DynamicTableApp {
    fn default() -> Self {
        Self::new(State::default())
    }
}

impl eframe::App for DynamicTableApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Exactly one outbound request per app lifetime, dispatched on the
        // first frame. The response is applied by the poll below.
        if !self.fetch_started {
            self.fetch_started = true;
            widgets::fetch_users(&self.state.config.users_url, ctx.clone());
        }

        widgets::poll_users_response(&mut self.state.table, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_table_panel(&mut self.state.table, ui);
        });
    }
}
