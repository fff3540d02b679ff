//! Pagination
//!
//! Page arithmetic for a list that is read as a window of the most recently
//! inserted records. Page N of size S needs the last `N * S` records; the
//! page itself is cut out of that window after sorting it.

use serde::{Deserialize, Serialize};

use crate::domain::{sort_newest_first, Item};

/// Choices offered by the per-page selector
pub const PER_PAGE_OPTIONS: &[usize] = &[5, 10, 20];

pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Number of pages needed for `total_items`; 0 for an empty list
pub fn page_count(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Pagination state held by the list controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            total_items: 0,
        }
    }
}

impl Pagination {
    /// One-based page; zero is bumped to 1, zero page size to the default
    pub fn new(current_page: usize, items_per_page: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            items_per_page: if items_per_page == 0 {
                DEFAULT_ITEMS_PER_PAGE
            } else {
                items_per_page
            },
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total_items, self.items_per_page)
    }

    /// Jump to a page given as the zero-based index the page buttons emit
    pub fn go_to_index(&mut self, index: usize) {
        self.current_page = index + 1;
    }

    /// Change the page size. The old page index means nothing at the new
    /// size, so this always returns to page 1. Zero is ignored.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if items_per_page == 0 {
            return;
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
    }

    /// Record a fresh total and pull the current page back onto the last
    /// existing page. Returns true when the page moved.
    pub fn set_total_items(&mut self, total_items: usize) -> bool {
        self.total_items = total_items;
        let last_page = self.page_count().max(1);
        if self.current_page > last_page {
            self.current_page = last_page;
            return true;
        }
        false
    }

    /// Window of records the current page needs
    pub fn window(&self) -> FetchWindow {
        FetchWindow {
            start_index: (self.current_page - 1) * self.items_per_page,
            items_per_page: self.items_per_page,
        }
    }
}

/// The records one fetch has to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    /// Position of the page's first row among newest-first records
    pub start_index: usize,
    pub items_per_page: usize,
}

impl FetchWindow {
    /// How many of the most recent records to read
    pub fn limit(&self) -> usize {
        self.start_index + self.items_per_page
    }

    /// Sort the whole window newest-first, then cut out the page.
    ///
    /// Sorting before slicing keeps a record on its page even when insertion
    /// order and `createdAt` order disagree within the window.
    pub fn slice(&self, mut window: Vec<Item>) -> Vec<Item> {
        sort_newest_first(&mut window);
        window
            .into_iter()
            .skip(self.start_index)
            .take(self.items_per_page)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, created_at: i64) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(1, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(20, 20), 1);
        for total in 0..50 {
            for per in [1, 2, 3, 5, 10, 20] {
                assert_eq!(page_count(total, per), (total + per - 1) / per);
            }
        }
    }

    #[test]
    fn test_window_for_second_page() {
        let mut p = Pagination::new(1, 2);
        p.set_total_items(5);
        p.go_to_index(1);
        assert_eq!(p.current_page(), 2);
        let w = p.window();
        assert_eq!(w.start_index, 2);
        assert_eq!(w.limit(), 4);
    }

    #[test]
    fn test_slice_takes_positions_after_start() {
        // Window of the last 4 inserted records, insertion order
        let window = vec![item("b", 20), item("c", 30), item("d", 40), item("e", 50)];
        let w = FetchWindow { start_index: 2, items_per_page: 2 };
        let page: Vec<_> = w.slice(window).into_iter().map(|i| i.id).collect();
        assert_eq!(page, vec!["c", "b"]);
    }

    #[test]
    fn test_slice_sorts_before_cutting() {
        // Insertion order disagrees with createdAt: "late" was inserted first
        let window = vec![item("late", 900), item("x", 10), item("y", 20)];
        let w = FetchWindow { start_index: 0, items_per_page: 2 };
        let page: Vec<_> = w.slice(window).into_iter().map(|i| i.id).collect();
        assert_eq!(page, vec!["late", "y"]);
    }

    #[test]
    fn test_partial_last_page() {
        let window = vec![item("a", 1), item("b", 2), item("c", 3)];
        let w = FetchWindow { start_index: 2, items_per_page: 2 };
        let page: Vec<_> = w.slice(window).into_iter().map(|i| i.id).collect();
        assert_eq!(page, vec!["a"]);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut p = Pagination::new(3, 5);
        p.set_items_per_page(10);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.items_per_page(), 10);

        p.set_items_per_page(0);
        assert_eq!(p.items_per_page(), 10);
    }

    #[test]
    fn test_total_shrink_clamps_page() {
        let mut p = Pagination::new(3, 5);
        assert!(p.set_total_items(10));
        assert_eq!(p.current_page(), 2);

        assert!(p.set_total_items(0));
        assert_eq!(p.current_page(), 1);
        assert!(!p.set_total_items(0));
    }

    #[test]
    fn test_defaults() {
        let p = Pagination::default();
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.items_per_page(), 5);
        assert_eq!(p.page_count(), 0);
        assert_eq!(Pagination::new(0, 0), p);
        assert!(PER_PAGE_OPTIONS.contains(&p.items_per_page()));
    }
}
