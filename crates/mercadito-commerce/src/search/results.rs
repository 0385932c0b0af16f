//! Search result payloads.

use crate::catalog::ProductSummary;
use serde::{Deserialize, Serialize};

/// Items per page when the caller doesn't say otherwise.
const DEFAULT_LIMIT: u64 = 24;

/// Offset-based paging block accompanying a result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPaging {
    /// Total matching items.
    pub total: u64,
    /// Offset of the first item in this page.
    pub offset: u64,
    /// Requested page size.
    pub limit: u64,
}

impl SearchPaging {
    pub fn new(total: u64, offset: u64, limit: u64) -> Self {
        Self {
            total,
            offset,
            limit,
        }
    }

    /// Whether more items exist past this page.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }

    /// Current page, 1-indexed.
    pub fn page(&self) -> u64 {
        if self.limit == 0 {
            return 1;
        }
        self.offset / self.limit + 1
    }

    /// Total number of pages, at least 1.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 || self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit)
    }
}

impl Default for SearchPaging {
    fn default() -> Self {
        Self::new(0, 0, DEFAULT_LIMIT)
    }
}

/// One page of search results as the search endpoint returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query that produced this page.
    pub query: String,
    /// Paging block.
    pub paging: SearchPaging,
    /// The matching products.
    pub results: Vec<ProductSummary>,
}

impl SearchResponse {
    /// An empty page for `query`.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            paging: SearchPaging::default(),
            results: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_page_numbers() {
        let p = SearchPaging::new(45, 10, 10);
        assert_eq!(p.page(), 2);
        assert_eq!(p.total_pages(), 5);
        assert!(p.has_more());
    }

    #[test]
    fn paging_last_page_has_no_more() {
        let p = SearchPaging::new(45, 40, 10);
        assert_eq!(p.page(), 5);
        assert!(!p.has_more());
    }

    #[test]
    fn paging_empty_results() {
        let p = SearchPaging::new(0, 0, 10);
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_pages(), 1);
        assert!(!p.has_more());
    }

    #[test]
    fn paging_zero_limit_does_not_divide_by_zero() {
        let p = SearchPaging::new(10, 0, 0);
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn empty_response_keeps_the_query() {
        let r = SearchResponse::empty("parlante bluetooth");
        assert_eq!(r.query, "parlante bluetooth");
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }
}
