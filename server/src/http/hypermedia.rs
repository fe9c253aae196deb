//! Link sets attached to every response.
//!
//! Hrefs are relative to the server root. Search hrefs carry their query as
//! an ordered list of pairs: filters in declared order, then `page`,
//! `pageSize`, `sortBy` and `sortDir`.

use neurotrack_api::{Link, Method, PageInfo};

use crate::persistence::SearchQuery;
use crate::service::{PAGE_PARAM, PAGE_SIZE_PARAM, SORT_BY_PARAM, SORT_DIR_PARAM};

/// The query pairs that reproduce `query` with its page replaced by `page`.
pub fn search_params(query: &SearchQuery, page: u32) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = query
        .filters
        .iter()
        .map(|f| (f.field.name, f.value.to_query_value()))
        .collect();
    params.push((PAGE_PARAM, page.to_string()));
    params.push((PAGE_SIZE_PARAM, query.page_size.to_string()));
    params.push((SORT_BY_PARAM, query.sort_by.clone()));
    params.push((SORT_DIR_PARAM, query.sort_dir.as_str().to_string()));
    params
}

pub fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds links under one collection path such as `/api/DailyLogs`.
#[derive(Debug, Clone, Copy)]
pub struct LinkBuilder {
    base: &'static str,
}

impl LinkBuilder {
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }

    pub fn item_href(&self, id: i64) -> String {
        format!("{}/{id}", self.base)
    }

    fn list(&self, rel: &str) -> Link {
        Link::new(rel, self.base, Method::Get)
    }

    fn search(&self) -> Link {
        Link::new("search", format!("{}/search", self.base), Method::Get)
    }

    fn create(&self) -> Link {
        Link::new("create", self.base, Method::Post)
    }

    fn search_page(&self, rel: &str, query: &SearchQuery, page: u32) -> Link {
        let href = format!(
            "{}/search?{}",
            self.base,
            encode_query(&search_params(query, page))
        );
        Link::new(rel, href, Method::Get)
    }

    /// Links on a single item, also used for the update confirmation.
    pub fn item(&self, id: i64) -> Vec<Link> {
        vec![
            Link::new("self", self.item_href(id), Method::Get),
            Link::new("delete", self.item_href(id), Method::Delete),
            self.list("list"),
            self.search(),
            self.create(),
            Link::new("update", self.base, Method::Put),
        ]
    }

    /// Links on the unpaginated listing.
    pub fn collection(&self) -> Vec<Link> {
        vec![self.list("self"), self.search(), self.create()]
    }

    pub fn deleted(&self) -> Vec<Link> {
        vec![self.list("list"), self.search(), self.create()]
    }

    /// Links on one search page: `prev` and `next` only where such a page
    /// exists.
    pub fn search_results(&self, query: &SearchQuery, page_info: &PageInfo) -> Vec<Link> {
        let mut links = vec![
            self.search_page("self", query, page_info.page),
            self.create(),
            self.list("list"),
        ];
        if page_info.has_prev() {
            links.push(self.search_page("prev", query, page_info.page - 1));
        }
        if page_info.has_next() {
            links.push(self.search_page("next", query, page_info.page + 1));
        }
        links
    }
}
