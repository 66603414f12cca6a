//! Page/limit arithmetic shared by the listing endpoints and the pagination control.
//!
//! Pages are 1-indexed. Raw query values are parsed leniently: anything that is not a
//! positive integer falls back to page 1 or the caller's default limit, so a negative or
//! zero-sized page never reaches a query.

/// Page size of the JSON article listings.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Page size of the rendered home listing.
pub const HOME_PER_PAGE: u64 = 12;

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: u64 = 100;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number, always >= 1.
    pub page: u64,
    /// Rows per page, always in `1..=MAX_PER_PAGE`.
    pub per_page: u64,
}

impl PageRequest {
    /// Builds a request from already-typed values, clamping them into range.
    ///
    /// # Arguments
    /// - `page` - Requested page; 0 is treated as 1
    /// - `per_page` - Requested size; 0 falls back to `default_per_page`
    /// - `default_per_page` - Size used when `per_page` is 0
    pub fn new(page: u64, per_page: u64, default_per_page: u64) -> Self {
        let per_page = if per_page == 0 {
            default_per_page
        } else {
            per_page
        };

        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Builds a request from raw query-string values.
    ///
    /// Absent, non-numeric, zero or negative values fall back to page 1 and
    /// `default_per_page` respectively.
    pub fn parse(page: Option<&str>, per_page: Option<&str>, default_per_page: u64) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let per_page = parse_positive(per_page).unwrap_or(default_per_page);

        Self::new(page, per_page, default_per_page)
    }

    /// Number of rows to skip: `(page - 1) * per_page`.
    ///
    /// Saturates at `i64::MAX`, the largest OFFSET the database accepts.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }

    /// Number of pages needed to show `total` rows at this page size.
    pub fn total_pages(&self, total: u64) -> u64 {
        total_pages(total, self.per_page)
    }
}

/// `ceil(total / per_page)`; 0 when there are no rows.
///
/// A `per_page` of 0 yields 0 rather than dividing by zero.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

fn parse_positive(value: Option<&str>) -> Option<u64> {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v as u64)
}
