//! ListState - Result of a Paged List Request

/// Items of one page plus the server-side total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub is_loading_page: bool,
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            is_loading_page: false,
        }
    }
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total_items: u64) -> Self {
        Self {
            items,
            total_items,
            is_loading_page: false,
        }
    }

    /// Mark a page request as in flight, keeping the current items on screen
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading_page = loading;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
