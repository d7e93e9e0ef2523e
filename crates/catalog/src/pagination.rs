//! Page slicing and the bounded page-number window shown in page controls.

use serde::Serialize;

use pethouse_core::DomainError;

/// Window width used by the catalog page controls.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// One entry of the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `len` items. An empty set still has no pages.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Build the page window around `current_page`.
///
/// Up to `max_visible` pages are listed in full. Beyond that the window
/// keeps the first and last page plus a fixed-shape neighbourhood of the
/// current page, with ellipses for the gaps: at most five numbers and two
/// ellipses. The fixed shapes need `max_visible >= 5`; smaller values are
/// raised to 5.
pub fn build_page_window(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageSlot> {
    let max_visible = max_visible.max(DEFAULT_MAX_VISIBLE);

    if total_pages <= max_visible {
        return (1..=total_pages).map(PageSlot::Page).collect();
    }

    let mut window = Vec::with_capacity(7);
    if current_page <= 3 {
        window.extend((1..=4).map(PageSlot::Page));
        window.push(PageSlot::Ellipsis);
        window.push(PageSlot::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        window.push(PageSlot::Page(1));
        window.push(PageSlot::Ellipsis);
        window.extend((total_pages - 3..=total_pages).map(PageSlot::Page));
    } else {
        window.push(PageSlot::Page(1));
        window.push(PageSlot::Ellipsis);
        window.extend((current_page - 1..=current_page + 1).map(PageSlot::Page));
        window.push(PageSlot::Ellipsis);
        window.push(PageSlot::Page(total_pages));
    }
    window
}

/// One page of items plus the page count of the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Cut page `page` (1-based) out of `items`.
///
/// Out-of-range pages (including page 0) give an empty page rather than an
/// error.
pub fn slice<T: Clone>(items: &[T], page: usize, per_page: usize) -> PageSlice<T> {
    let total_pages = total_pages(items.len(), per_page);
    let page_items = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(per_page).min(items.len());
            let end = start.saturating_add(per_page).min(items.len());
            items[start..end].to_vec()
        }
        None => Vec::new(),
    };
    PageSlice {
        items: page_items,
        total_pages,
    }
}

/// Navigation request coming from the page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(usize),
    Previous,
    Next,
}

impl PageRequest {
    /// Resolve the request against the current position.
    ///
    /// The result always lies in `[1, max(1, total_pages)]`; previous/next
    /// at the edges leave the page unchanged.
    pub fn resolve(self, current_page: usize, total_pages: usize) -> usize {
        let last = total_pages.max(1);
        let target = match self {
            PageRequest::Number(n) => n,
            PageRequest::Previous => current_page.saturating_sub(1),
            PageRequest::Next => current_page.saturating_add(1),
        };
        target.clamp(1, last)
    }
}

impl core::str::FromStr for PageRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "prev" | "previous" => Ok(PageRequest::Previous),
            "next" => Ok(PageRequest::Next),
            other => other.parse::<usize>().map(PageRequest::Number).map_err(|e| {
                DomainError::validation(format!("invalid page request '{other}': {e}"))
            }),
        }
    }
}

/// Everything a renderer needs to draw the page controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub window: Vec<PageSlot>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationModel {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            window: build_page_window(current_page, total_pages, DEFAULT_MAX_VISIBLE),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    /// A single page needs no controls; renderers clear the container.
    pub fn is_hidden(&self) -> bool {
        self.total_pages <= 1
    }
}
