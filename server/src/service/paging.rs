//! Default and clamp rules for search paging and sorting.

use crate::persistence::{Filter, SearchQuery, SortDirection};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// A search as the caller asked for it, before any defaults apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub filters: Vec<Filter>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl SearchRequest {
    /// Apply defaults and clamps. `default_sort` stands in for a missing
    /// `sort_by`.
    pub fn normalize(self, default_sort: &str) -> SearchQuery {
        SearchQuery {
            filters: self.filters,
            page: clamp_page(self.page),
            page_size: clamp_page_size(self.page_size),
            sort_by: self.sort_by.unwrap_or_else(|| default_sort.to_string()),
            sort_dir: self
                .sort_dir
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
        }
    }
}

/// Absent or below 1 becomes 1.
pub fn clamp_page(page: Option<i64>) -> u32 {
    match page {
        Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
        _ => DEFAULT_PAGE,
    }
}

/// Absent or below 1 becomes the default; anything above the maximum is cut
/// down to it.
pub fn clamp_page_size(page_size: Option<i64>) -> u32 {
    match page_size {
        Some(s) if s > i64::from(MAX_PAGE_SIZE) => MAX_PAGE_SIZE,
        Some(s) if s >= 1 => s as u32,
        _ => DEFAULT_PAGE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_at_least_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-4)), 1);
        assert_eq!(clamp_page(Some(3)), 3);
        assert_eq!(clamp_page(Some(i64::MAX)), u32::MAX);
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(clamp_page_size(None), 10);
        assert_eq!(clamp_page_size(Some(0)), 10);
        assert_eq!(clamp_page_size(Some(-1)), 10);
        assert_eq!(clamp_page_size(Some(1)), 1);
        assert_eq!(clamp_page_size(Some(100)), 100);
        assert_eq!(clamp_page_size(Some(101)), 100);
        assert_eq!(clamp_page_size(Some(i64::MAX)), 100);
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let query = SearchRequest::default().normalize("idLog");
        assert!(query.filters.is_empty());
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.sort_by, "idLog");
        assert_eq!(query.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn test_normalize_keeps_explicit_values() {
        let query = SearchRequest {
            filters: vec![],
            page: Some(2),
            page_size: Some(5),
            sort_by: Some("workHours".to_string()),
            sort_dir: Some("DESC".to_string()),
        }
        .normalize("idLog");
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 5);
        assert_eq!(query.sort_by, "workHours");
        assert_eq!(query.sort_dir, SortDirection::Desc);
    }
}
