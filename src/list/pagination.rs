/// Prev/next control over a 0-based page index.
///
/// It only reports which page to go to; the caller owns the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub disabled: bool,
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32, disabled: bool) -> Self {
        Self {
            page,
            total_pages,
            disabled,
        }
    }

    /// Single-page and empty results render no controls at all.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn can_prev(&self) -> bool {
        self.is_visible() && !self.disabled && self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.is_visible() && !self.disabled && self.page + 1 < self.total_pages
    }

    pub fn prev(&self) -> Option<u32> {
        self.can_prev().then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.can_next().then(|| self.page + 1)
    }

    /// 1-based indicator, e.g. "Page 2 / 5".
    pub fn label(&self) -> Option<String> {
        self.is_visible()
            .then(|| format!("Page {} / {}", self.page + 1, self.total_pages))
    }
}
