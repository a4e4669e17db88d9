//! Pagination Component
//!
//! Page arithmetic, navigation-button availability and the page number kept
//! in the location query string.

use crate::constants::PAGE_PARAM;
use crate::i18n::{Locale, t_args};
use crate::state::location_state::Location;

/// Derived range information for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    /// 1-based index of the first item on the page
    pub from: u64,
    /// 1-based index of the last item on the page
    pub to: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Compute the item range and page count for `page` (1-based)
pub fn get_pagination_info(page: u32, page_size: u32, total_items: u64) -> PaginationInfo {
    let page = u64::from(page.max(1));
    let page_size = u64::from(page_size.max(1));
    PaginationInfo {
        from: (page - 1) * page_size + 1,
        to: (page * page_size).min(total_items),
        total_items,
        total_pages: total_items.div_ceil(page_size),
    }
}

/// Parse a page parameter; missing, non-numeric or zero values give page 1
pub fn parse_page(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Pagination controls for a list footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub is_loading_page: bool,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            page: page.max(1),
            page_size,
            total_items,
            is_loading_page: false,
        }
    }

    /// Set the loading state
    pub fn loading(mut self, is_loading_page: bool) -> Self {
        self.is_loading_page = is_loading_page;
        self
    }

    pub fn info(&self) -> PaginationInfo {
        get_pagination_info(self.page, self.page_size, self.total_items)
    }

    fn total_pages(&self) -> u32 {
        u32::try_from(self.info().total_pages).unwrap_or(u32::MAX)
    }

    pub fn can_go_first(&self) -> bool {
        !self.is_loading_page && self.page > 1
    }

    pub fn can_go_prev(&self) -> bool {
        self.can_go_first()
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading_page && self.page < self.total_pages()
    }

    pub fn can_go_last(&self) -> bool {
        self.can_go_next()
    }

    /// Target page of the "first" button
    pub fn first_page(&self) -> u32 {
        1
    }

    /// Target page of the "previous" button
    pub fn prev_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    /// Target page of the "next" button
    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1).min(self.last_page())
    }

    /// Target page of the "last" button
    pub fn last_page(&self) -> u32 {
        self.total_pages().max(1)
    }

    /// "Showing {from} to {to} of {total}"
    pub fn info_label(&self, locale: Locale) -> String {
        let info = self.info();
        t_args(
            locale,
            "pagination-info",
            &[
                ("from", &info.from.min(info.total_items).to_string()),
                ("to", &info.to.to_string()),
                ("total", &info.total_items.to_string()),
            ],
        )
    }
}

/// Current page stored in the location query string.
///
/// Stateless apart from the location it reads: it never corrects a page that
/// turns out to be empty, the owning screen does that.
#[derive(Debug, Clone)]
pub struct PaginationState {
    location: Location,
}

impl PaginationState {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    /// Current page (≥ 1)
    pub fn page(&self) -> u32 {
        parse_page(self.location.get(PAGE_PARAM).as_deref())
    }

    /// Write a page back to the location, clamped to ≥ 1
    pub fn set_page(&self, page: u32) {
        let page = page.max(1);
        tracing::debug!(page, "Setting page");
        self.location.set(PAGE_PARAM, page.to_string());
    }
}
