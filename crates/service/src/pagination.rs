//! Page window for listing endpoints (`?page=&per_page=`).

/// Page size used when the query leaves `per_page` out.
pub const DEFAULT_PER_PAGE: u32 = 20;
/// Largest page a client may ask for.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    /// Build from optional query values, filling gaps with the defaults.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self { page: page.unwrap_or(1), per_page: per_page.unwrap_or(DEFAULT_PER_PAGE) }
    }

    /// Row `(offset, limit)` for the query. Page 0 reads as page 1 and the
    /// page size is clamped to `1..=MAX_PER_PAGE`.
    pub fn offset_limit(self) -> (u64, u64) {
        let page = u64::from(self.page.max(1));
        let limit = u64::from(self.per_page.clamp(1, MAX_PER_PAGE));
        ((page - 1).saturating_mul(limit), limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from_query(None, None)
    }
}
