/// Pagination support for watchlist queries
///
/// Standard pagination model used by the store and the service layer.
use serde::{Deserialize, Serialize};

/// Page size shown by the log view. Kept as a constant so callers pass it
/// explicitly instead of queries baking it in.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Pagination parameters for queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Resolve a raw page value from a query string: absent defaults to 1,
    /// out-of-range values are clamped into `1..=u32::MAX`.
    pub fn from_page(page: Option<i64>) -> Self {
        let page = page.unwrap_or(1).clamp(1, u32::MAX as i64) as u32;
        Self {
            page,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Calculate offset for database queries. Widened so large page numbers
    /// stay arithmetic, not a panic.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.page_size as i64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }

    /// Display range for the current page: 1-based start and inclusive end,
    /// capped at the collection size. An empty collection yields end = 0.
    pub fn window(&self, total_count: u64) -> (u64, u64) {
        let offset = self.offset() as u64;
        let start = offset + 1;
        let end = (offset + self.page_size as u64).min(total_count);
        (start, end)
    }
}
