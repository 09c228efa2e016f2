/// Pagination metadata for a page-numbered list (pages are 1-indexed)
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Pager {
    pub total_items: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub start_page: u32,
    pub end_page: u32,
    pub start_index: u64,
    pub end_index: u64,
    /// Page numbers shown in the pager strip
    pub pages: Vec<u32>,
}

impl Pager {
    pub fn contains_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PaginationService {
    page_strip: u32,
}

impl Default for PaginationService {
    fn default() -> Self {
        Self { page_strip: 5 }
    }
}

impl PaginationService {
    pub fn new(page_strip: u32) -> Self {
        Self {
            page_strip: page_strip.max(1),
        }
    }

    pub fn get_pager(&self, total_items: u64, current_page: u32, page_size: u32) -> Pager {
        let page_size = page_size.max(1);
        let current_page = current_page.max(1);
        let total_pages = total_items.div_ceil(u64::from(page_size)) as u32;
        let strip = self.page_strip;
        // Route values can point past the last page; the strip stays in range.
        let anchor = current_page.min(total_pages.max(1));

        let (start_page, end_page) = if total_pages <= strip {
            (1, total_pages)
        } else {
            let before = strip / 2;
            let after = strip - before - 1;
            if anchor <= before + 1 {
                (1, strip)
            } else if anchor.saturating_add(after) >= total_pages {
                (total_pages - strip + 1, total_pages)
            } else {
                (anchor - before, anchor + after)
            }
        };

        let start_index = u64::from(current_page - 1) * u64::from(page_size);
        let end_index = (start_index + u64::from(page_size) - 1).min(total_items.saturating_sub(1));

        Pager {
            total_items,
            current_page,
            page_size,
            total_pages,
            start_page,
            end_page,
            start_index,
            end_index,
            pages: (start_page..=end_page).filter(|p| *p >= 1).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_list_shows_all_pages() {
        let pager = PaginationService::new(5).get_pager(25, 2, 9);
        assert_eq!(pager.total_pages, 3);
        assert_eq!(pager.pages, vec![1, 2, 3]);
        assert_eq!(pager.start_index, 9);
        assert_eq!(pager.end_index, 17);
    }

    #[test]
    fn test_strip_window_moves_with_current_page() {
        let svc = PaginationService::new(5);
        assert_eq!(svc.get_pager(100, 1, 10).pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(svc.get_pager(100, 6, 10).pages, vec![4, 5, 6, 7, 8]);
        assert_eq!(svc.get_pager(100, 10, 10).pages, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_last_page_end_index_is_clamped() {
        let pager = PaginationService::default().get_pager(23, 3, 10);
        assert_eq!(pager.end_index, 22);
        assert!(pager.contains_page(3));
        assert!(!pager.contains_page(0));
        assert!(!pager.contains_page(4));
    }

    #[test]
    fn test_page_past_the_end_keeps_strip_in_range() {
        let svc = PaginationService::new(5);
        let pager = svc.get_pager(100, u32::MAX, 9);
        assert_eq!(pager.total_pages, 12);
        assert_eq!(pager.pages, vec![8, 9, 10, 11, 12]);
        assert_eq!(pager.current_page, u32::MAX);
        assert!(!pager.contains_page(u32::MAX));

        let small = svc.get_pager(20, 40, 9);
        assert_eq!(small.pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_list() {
        let pager = PaginationService::default().get_pager(0, 1, 9);
        assert_eq!(pager.total_pages, 0);
        assert!(pager.pages.is_empty());
        assert!(!pager.contains_page(1));
    }
}
