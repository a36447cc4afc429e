//! Page-of-results contract shared by every resource listing.
//!
//! A [`PaginatedResult`] is either decoded from a backend listing response or
//! built locally with [`PaginatedResult::new`], which derives every computed
//! field. Decoded results are checked with [`PaginatedResult::validate`]
//! before the view layer trusts them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the configuration does not provide one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Ways a page of results can break its own contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("page must be at least 1, got {0}")]
    PageBelowOne(usize),

    #[error("limit must be greater than zero")]
    ZeroLimit,

    #[error("page holds {len} items but limit is {limit}")]
    PageOverflow { len: usize, limit: usize },

    #[error("filterCount {filter_count} exceeds totalCount {total_count}")]
    FilterExceedsTotal {
        filter_count: usize,
        total_count: usize,
    },

    #[error("totalPages is {actual}, expected {expected}")]
    TotalPagesMismatch { actual: usize, expected: usize },

    #[error("hasNextPage is {actual}, expected {expected}")]
    HasNextPageMismatch { actual: bool, expected: bool },

    #[error("hasPreviousPage is {actual}, expected {expected}")]
    HasPreviousPageMismatch { actual: bool, expected: bool },

    #[error("filterCount is 0 but the page holds {0} items")]
    DataWithoutMatches(usize),
}

/// One bounded slice of a filtered, sorted collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total_count: usize,
    pub filter_count: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(default)]
    pub first_item_index: i64,
    #[serde(default)]
    pub last_item_index: i64,
}

fn expected_total_pages(filter_count: usize, limit: usize) -> usize {
    if limit == 0 {
        0
    } else {
        filter_count.div_ceil(limit)
    }
}

impl<T> PaginatedResult<T> {
    /// Builds a page and derives page count, navigation flags and item bounds.
    pub fn new(
        data: Vec<T>,
        page: usize,
        limit: usize,
        total_count: usize,
        filter_count: usize,
    ) -> Self {
        let page = page.max(1);
        let total_pages = expected_total_pages(filter_count, limit);
        let first_item_index = i64::try_from((page - 1).saturating_mul(limit)).unwrap_or(i64::MAX);
        let last_item_index = page.saturating_mul(limit).min(filter_count) as i64 - 1;

        Self {
            data,
            page,
            limit,
            total_count,
            filter_count,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
            first_item_index,
            last_item_index,
        }
    }

    /// First page of an empty collection.
    pub fn empty(limit: usize) -> Self {
        Self::new(Vec::new(), 1, limit, 0, 0)
    }

    /// True when nothing matches the current filter, whatever the total is.
    pub fn is_empty(&self) -> bool {
        self.filter_count == 0
    }

    /// Checks the page against the derivation rules of its metadata.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.page < 1 {
            return Err(InvariantViolation::PageBelowOne(self.page));
        }
        if self.limit == 0 {
            return Err(InvariantViolation::ZeroLimit);
        }
        if self.data.len() > self.limit {
            return Err(InvariantViolation::PageOverflow {
                len: self.data.len(),
                limit: self.limit,
            });
        }
        if self.filter_count > self.total_count {
            return Err(InvariantViolation::FilterExceedsTotal {
                filter_count: self.filter_count,
                total_count: self.total_count,
            });
        }
        if self.filter_count == 0 && !self.data.is_empty() {
            return Err(InvariantViolation::DataWithoutMatches(self.data.len()));
        }

        let expected = expected_total_pages(self.filter_count, self.limit);
        if self.total_pages != expected {
            return Err(InvariantViolation::TotalPagesMismatch {
                actual: self.total_pages,
                expected,
            });
        }

        let expected_next = self.page < self.total_pages;
        if self.has_next_page != expected_next {
            return Err(InvariantViolation::HasNextPageMismatch {
                actual: self.has_next_page,
                expected: expected_next,
            });
        }

        let expected_previous = self.page > 1;
        if self.has_previous_page != expected_previous {
            return Err(InvariantViolation::HasPreviousPageMismatch {
                actual: self.has_previous_page,
                expected: expected_previous,
            });
        }

        Ok(())
    }

    /// Page links for the navigation bar, `None` marking an elided gap.
    pub fn page_window(&self) -> Vec<Option<usize>> {
        page_window(self.total_pages, self.page)
    }
}

/// Pages always linked at each end of the navigation bar.
const EDGE_PAGES: usize = 2;
/// Pages linked before the current one.
const PAGES_BEFORE: usize = 2;
/// Pages linked after the current one.
const PAGES_AFTER: usize = 4;

/// Page links for a bar over `total_pages` pages centred on `current_page`.
///
/// The first and last two pages are always present, and each run
/// of skipped pages collapses into a single `None`. Only the linked pages are
/// visited, so a huge page count costs nothing extra.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let current = current_page.clamp(1, total_pages.max(1));

    // Sorted by start: current - PAGES_BEFORE never passes the last edge.
    let runs = [
        (1, EDGE_PAGES.min(total_pages)),
        (
            current.saturating_sub(PAGES_BEFORE).max(1),
            current.saturating_add(PAGES_AFTER).min(total_pages),
        ),
        (total_pages.saturating_sub(EDGE_PAGES) + 1, total_pages),
    ];

    let mut window = Vec::new();
    let mut next_unlinked = 1;
    for (first, last) in runs {
        let first = first.max(next_unlinked);
        if first > last {
            continue;
        }
        if first > next_unlinked {
            window.push(None);
        }
        window.extend((first..=last).map(Some));
        next_unlinked = last.saturating_add(1);
    }
    window
}
