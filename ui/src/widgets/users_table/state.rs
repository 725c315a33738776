//! State for the users table widget.

use dyntable_business::{LoadState, TableView};

/// State for the users table: the load outcome plus the two view inputs.
pub struct UsersTableState {
    /// Outcome of the startup fetch.
    pub load: LoadState,
    /// Search text, matched against names case-insensitively.
    pub search: String,
    /// 1-based page index. Kept in range by disabling navigation at the
    /// boundaries, never by clamping the value itself.
    pub current_page: usize,
}

impl Default for UsersTableState {
    fn default() -> Self {
        Self {
            load: LoadState::default(),
            search: String::new(),
            current_page: 1,
        }
    }
}

impl UsersTableState {
    /// Derive this frame's filtered, paginated view.
    pub fn view(&self) -> TableView<'_> {
        let records = self.load.records().unwrap_or(&[]);
        TableView::derive(records, &self.search, self.current_page)
    }

    /// Go back one page. No-op on the first page; the button is disabled
    /// there, this is the backstop.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Advance one page, bounded by `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }
}
