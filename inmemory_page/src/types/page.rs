//! One decoded page of results.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{record::PageRecord, PageRequest, Sort};

/// Ordered content plus the page request it was served for.
///
/// Every page-level number is derived on demand from those two fields. Without
/// a page request the model is a single page of size zero holding all of its
/// content.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    from = "PageRecord<T>",
    bound(deserialize = "T: Deserialize<'de>", serialize = "T: Serialize")
)]
pub struct PageModel<T> {
    content: Vec<T>,

    #[serde(rename = "page", skip_serializing_if = "Option::is_none")]
    pageable: Option<PageRequest>,
}

// PageRequest equality leaves out the reported total, but two pages with
// different totals disagree on total_pages() and has_next().
impl<T: PartialEq> PartialEq for PageModel<T> {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
            && self.pageable == other.pageable
            && self.pageable.as_ref().map(PageRequest::total_elements)
                == other.pageable.as_ref().map(PageRequest::total_elements)
    }
}

impl<T> Default for PageModel<T> {
    fn default() -> Self {
        Self::unpaged(Vec::new())
    }
}

impl<T> PageModel<T> {
    pub fn new(content: Vec<T>, pageable: Option<PageRequest>) -> Self {
        Self { content, pageable }
    }

    pub fn unpaged(content: Vec<T>) -> Self {
        Self::new(content, None)
    }

    /// Read-only view of the content.
    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn pageable(&self) -> Option<&PageRequest> {
        self.pageable.as_ref()
    }

    fn total_raw(&self) -> i64 {
        match &self.pageable {
            Some(pageable) => pageable.total_elements(),
            None => self.content.len() as i64,
        }
    }

    /// Number of pages implied by the reported total. A size of zero yields
    /// exactly one page.
    pub fn total_pages(&self) -> i64 {
        let size = i64::from(self.size());
        if size == 0 {
            return 1;
        }
        ceil_div(self.total_raw(), size)
    }

    /// The reported total, raised to `offset + content.len()` when the
    /// content in hand already reaches past it.
    pub fn total_elements(&self) -> i64 {
        let total = self.total_raw();
        match &self.pageable {
            Some(pageable)
                if !self.content.is_empty()
                    && pageable.offset() + i64::from(pageable.page_size()) > total =>
            {
                pageable.offset() + self.content.len() as i64
            }
            _ => total,
        }
    }

    pub fn number(&self) -> i32 {
        self.pageable.as_ref().map_or(0, PageRequest::page_number)
    }

    pub fn size(&self) -> i32 {
        self.pageable.as_ref().map_or(0, PageRequest::page_size)
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    /// False on page `i32::MAX`, which has no addressable successor.
    pub fn has_next(&self) -> bool {
        self.number() < i32::MAX && i64::from(self.number()) + 1 < self.total_pages()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.number() > 0
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn next_pageable(&self) -> Option<PageRequest> {
        if !self.has_next() {
            return None;
        }
        self.pageable.as_ref().map(PageRequest::next)
    }

    pub fn previous_pageable(&self) -> Option<PageRequest> {
        if !self.has_previous() {
            return None;
        }
        self.pageable.as_ref().map(PageRequest::previous_or_first)
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.pageable.as_ref().and_then(PageRequest::sort)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    /// Converts every element, keeping the page request.
    pub fn map<U, F>(self, f: F) -> PageModel<U>
    where
        F: FnMut(T) -> U,
    {
        PageModel {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
        }
    }
}

impl<'a, T> IntoIterator for &'a PageModel<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

impl<T> fmt::Display for PageModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content_type = if self.content.is_empty() {
            "UNKNOWN"
        } else {
            std::any::type_name::<T>()
        };
        write!(
            f,
            "Page {} of {} containing {} instances",
            self.number(),
            self.total_pages(),
            content_type
        )
    }
}

// Rounds toward positive infinity for any sign combination. Hydrated
// requests may carry a negative size, so this must not assume positives.
fn ceil_div(total: i64, size: i64) -> i64 {
    let quotient = total.wrapping_div(size);
    if total.wrapping_rem(size) != 0 && (total < 0) == (size < 0) {
        quotient + 1
    } else {
        quotient
    }
}
