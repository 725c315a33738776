//! Pure filter/paginate derivation over the loaded records.
//!
//! Recomputed from scratch on every frame. The record lists involved are a
//! few dozen entries, so there is nothing worth memoizing.

use crate::user::UserRecord;

/// Fixed number of rows shown per page.
pub const ROWS_PER_PAGE: usize = 4;

/// One frame's view of the table: the visible window plus paging facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    /// The rows to render for the current page, in sorted order.
    pub page_rows: Vec<&'a UserRecord>,
    /// How many records match the search text.
    pub filtered_count: usize,
    /// Always at least 1, even when nothing matches.
    pub total_pages: usize,
    /// The 1-based page index the view was derived for.
    pub current_page: usize,
}

impl<'a> TableView<'a> {
    /// Derive the view for one frame.
    ///
    /// Filtering is a case-insensitive substring match on `name` only.
    /// A stale `current_page` (the search shrank the set under it) yields an
    /// empty `page_rows` rather than snapping the page back.
    pub fn derive(records: &'a [UserRecord], search: &str, current_page: usize) -> Self {
        let needle = search.to_lowercase();
        let filtered: Vec<&UserRecord> = records
            .iter()
            .filter(|user| user.name.to_lowercase().contains(&needle))
            .collect();

        let filtered_count = filtered.len();
        let total_pages = filtered_count.div_ceil(ROWS_PER_PAGE).max(1);

        let start = current_page.saturating_sub(1) * ROWS_PER_PAGE;
        let page_rows = if start >= filtered_count {
            Vec::new()
        } else {
            let end = (start + ROWS_PER_PAGE).min(filtered_count);
            filtered[start..end].to_vec()
        };

        Self {
            page_rows,
            filtered_count,
            total_pages,
            current_page,
        }
    }

    /// Whether the "Previous" control should be enabled.
    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "Next" control should be enabled.
    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }
}
