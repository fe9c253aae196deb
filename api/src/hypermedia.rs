//! Hypermedia envelopes.
//!
//! Every response body carries a `_links` array describing the follow-up
//! operations available from that point, in the shape `{rel, href, method}`.

use serde::{Deserialize, Serialize};

use crate::page::PageInfo;

/// HTTP method advertised by a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    pub method: Method,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>, method: Method) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            method,
        }
    }
}

/// A single transfer object plus its links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    pub data: T,
    #[serde(rename = "_links")]
    pub links: Vec<Link>,
}

/// A page of item resources plus collection-level links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResource<T> {
    pub items: Vec<Resource<T>>,
    pub page_info: PageInfo,
    #[serde(rename = "_links")]
    pub links: Vec<Link>,
}

/// Confirmation body returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResource {
    pub message: String,
    #[serde(rename = "_links")]
    pub links: Vec<Link>,
}

/// Find a link by relation name.
pub fn find_link<'a>(links: &'a [Link], rel: &str) -> Option<&'a Link> {
    links.iter().find(|l| l.rel == rel)
}
