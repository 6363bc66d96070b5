use serde::{Deserialize, Serialize};

// Re-export role types from the permission module
pub use crate::domains::permission::{sections_for, DashboardSection, Permission, UserRole, UserStatus};

/// Pagination parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }.normalized()
    }

    /// Page and page size are both at least 1
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.max(1),
        }
    }

    /// Number of items to skip, as sent to the backend
    pub fn offset(&self) -> u64 {
        let params = self.normalized();
        u64::from(params.page - 1) * u64::from(params.per_page)
    }
}

/// Paginated result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, params: PaginationParams) -> Self {
        let params = params.normalized();
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
            total_pages: total_pages(total, params.per_page),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// Page buttons to render around the current page
    pub fn page_buttons(&self, max_buttons: u32) -> Vec<u32> {
        page_window(self.page, self.total_pages, max_buttons)
    }
}

/// Ceiling division of `total` by `per_page`; zero items means zero pages
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total.div_ceil(per_page);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Contiguous run of page numbers containing `current`.
///
/// The window is centered on `current` where the bounds allow it and is
/// clamped to `1..=total_pages`. `current` is clamped into range first, so a
/// stale page number after a filter change still yields a usable window.
pub fn page_window(current: u32, total_pages: u32, max_buttons: u32) -> Vec<u32> {
    if total_pages == 0 || max_buttons == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let width = max_buttons.min(total_pages);

    let start = current.saturating_sub(width / 2).max(1);
    let end = start.saturating_add(width - 1).min(total_pages);
    let start = end - (width - 1);

    (start..=end).collect()
}
