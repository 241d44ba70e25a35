//! Pagination windowing

/// Default rows per page, matching the grid's page-size selector default
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Requested page window
///
/// Pages are 1-indexed. When groups exist, the same window is applied to
/// every group independently rather than to the flattened total; the
/// page-count label is still computed from the summed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Bypass windowing entirely
    pub show_all: bool,
}

impl PageRequest {
    /// A specific page at the given size
    pub fn page(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            show_all: false,
        }
    }

    /// Everything, unwindowed
    pub fn all() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            show_all: true,
        }
    }

    /// The `[start, end)` slice bounds within a group of `total` rows
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        if self.show_all {
            return (0, total);
        }
        let page = self.page.max(1);
        let start = (page - 1).saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        (start, end)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::page(1, DEFAULT_PAGE_SIZE)
    }
}

/// Total page count for a row total: `ceil(total / page_size)`
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (total_rows + page_size - 1) / page_size
}
