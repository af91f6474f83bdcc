use crate::client::PageResponse;
use crate::list::Pagination;

/// One page of one resource type, as last rendered.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> ListState<T> {
    pub fn new(size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            size: size.max(1),
            total_pages: 0,
            total_elements: 0,
            loading: false,
            error: None,
        }
    }

    pub fn apply_page(&mut self, page: PageResponse<T>) {
        self.items = page.content;
        self.page = page.number;
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
        self.error = None;
    }

    /// Keeps the previous items visible next to the error.
    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.total_pages, self.loading)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
