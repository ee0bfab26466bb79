//! Pagination metadata returned by search endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Link;

/// Pagination block of a search response.
///
/// Informational only: the client never follows `next` on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of items per page.
    pub count_per_page: Option<u32>,
    /// Total number of items across all pages.
    pub total_count: Option<u64>,
    /// Current page number (1-indexed).
    pub current_page: Option<u32>,
    /// Total number of pages.
    pub total_pages: Option<u32>,
    /// Links to neighbouring pages.
    #[serde(rename = "_links")]
    pub links: Option<PaginationLinks>,
}

/// Links to the previous and next pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub previous: Option<Link>,
    pub next: Option<Link>,
}

impl Pagination {
    /// Whether a further page exists.
    ///
    /// Uses the `next` link when present, otherwise compares the page
    /// counters.
    pub fn has_next(&self) -> bool {
        if self.next_href().is_some() {
            return true;
        }
        match (self.current_page, self.total_pages) {
            (Some(current), Some(total)) => current < total,
            _ => false,
        }
    }

    /// The page number after the current one, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        if !self.has_next() {
            return None;
        }
        self.current_page.map(|p| p + 1)
    }

    /// Href of the next page, relative to the API host.
    pub fn next_href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.next.as_ref())
            .and_then(|n| n.href.as_deref())
    }
}
