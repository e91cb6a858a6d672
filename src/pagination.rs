use serde::Serialize;

use crate::controller::SearchController;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }
    let current_page = current_page.min(last_page);

    let mut pages = Vec::new();

    let left_end = left_edge.saturating_add(1).min(last_page.saturating_add(1));
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page.saturating_add(1));

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// A page of items with the numbered links around it.
///
/// `None` in `pages` marks an ellipsis.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// 1-based position of the first item on the page, 0 when empty.
    pub first_item: usize,
    pub last_item: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            total_items: items.len(),
            first_item: usize::from(!items.is_empty()),
            last_item: items.len(),
            items,
            pages,
            page: current_page,
            total_pages,
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    /// Window over the page loaded by `controller`, with navigation flags
    /// derived from it.
    pub fn from_controller(items: Vec<T>, controller: &SearchController) -> Self {
        let mut paginated = Self::new(items, controller.current_page(), controller.total_pages());
        paginated.has_prev = controller.has_prev_page();
        paginated.has_next = controller.has_next_page();

        let total = controller.result().map_or(0, |result| result.total);
        let offset = controller.query().offset;
        paginated.total_items = total;
        if paginated.items.is_empty() {
            paginated.first_item = 0;
            paginated.last_item = 0;
        } else {
            paginated.first_item = offset.saturating_add(1);
            paginated.last_item = offset.saturating_add(paginated.items.len());
        }
        paginated
    }
}
