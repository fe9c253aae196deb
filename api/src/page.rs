//! Pagination metadata.

use serde::{Deserialize, Serialize};

/// Describes where a page sits within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PageInfo {
    /// Build page metadata, deriving `total_pages` as `ceil(total_items / page_size)`.
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            u32::try_from(total_items.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
        };
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    /// Metadata for an unpaginated listing: everything on one page.
    pub fn single_page(total_items: u64) -> Self {
        Self {
            page: 1,
            page_size: u32::try_from(total_items).unwrap_or(u32::MAX),
            total_items,
            total_pages: 1,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// A page of items together with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PageInfo::new(1, 5, 12).total_pages, 3);
        assert_eq!(PageInfo::new(1, 5, 10).total_pages, 2);
        assert_eq!(PageInfo::new(1, 100, 1).total_pages, 1);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let info = PageInfo::new(1, 10, 0);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next());
        assert!(!info.has_prev());
    }

    #[test]
    fn test_prev_and_next_depend_on_position() {
        let first = PageInfo::new(1, 5, 12);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let middle = PageInfo::new(2, 5, 12);
        assert!(middle.has_prev());
        assert!(middle.has_next());

        let last = PageInfo::new(3, 5, 12);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn test_single_page_covers_everything() {
        let info = PageInfo::single_page(4);
        assert_eq!(
            info,
            PageInfo {
                page: 1,
                page_size: 4,
                total_items: 4,
                total_pages: 1
            }
        );
    }

    #[test]
    fn test_counts_beyond_u32_saturate() {
        let huge = u64::from(u32::MAX) * 4;
        assert_eq!(PageInfo::new(1, 1, huge).total_pages, u32::MAX);
        assert_eq!(PageInfo::new(1, 2, huge).total_pages, u32::MAX);
        assert_eq!(PageInfo::new(1, 100, huge).total_pages, 171_798_692);
        assert_eq!(PageInfo::single_page(huge).page_size, u32::MAX);
        assert_eq!(PageInfo::single_page(huge).total_items, huge);
    }
}
