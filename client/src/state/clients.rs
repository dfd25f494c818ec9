//! Client-list paging state.
//!
//! DESIGN
//! ======
//! The list is addressed by `skip`/`limit` offsets exactly as the directory
//! pages them. Bounds are recomputed from the last known `total` so the
//! controls never request an offset past the final page.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub skip: u32,
    /// Total rows reported by the last page; 0 before the first response.
    pub total: u32,
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self { limit: limit.max(1), skip: 0, total: 0 }
    }

    /// 1-based page number of the current offset.
    pub fn current_page(&self) -> u32 {
        self.skip / self.limit + 1
    }

    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.limit).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.skip > 0
    }

    pub fn has_next(&self) -> bool {
        self.skip.saturating_add(self.limit) < self.total
    }

    pub fn prev(&mut self) {
        self.skip = self.skip.saturating_sub(self.limit);
    }

    pub fn next(&mut self) {
        let last_page_skip = (self.total_pages() - 1) * self.limit;
        self.skip = last_page_skip.min(self.skip.saturating_add(self.limit));
    }

    /// Footer summary, e.g. `Page 2 / 21 (208 total)`.
    pub fn summary(&self) -> String {
        format!("Page {} / {} ({} total)", self.current_page(), self.total_pages(), self.total)
    }
}
