//! Offset pagination request

/// Default page size
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Maximum page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a page request, clamping size to 1..=MAX_PAGE_SIZE
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Row offset for SQL `OFFSET`
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// Row count for SQL `LIMIT`
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}
