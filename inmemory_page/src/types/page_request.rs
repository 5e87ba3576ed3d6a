//! Descriptor of one slice of a larger result set.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{record::PageRequestRecord, Sort};
use crate::Error;

/// Page number, page size, sort and the total element count reported by the
/// origin.
///
/// Built either through [`PageRequest::new`], which validates its input, or by
/// decoding a `"page"` object, which does not (see [`PageRequestRecord`]).
///
/// Equality and hashing cover number, size and sort only. The reported total
/// travels along as metadata and is dropped by [`next`](Self::next) and
/// [`first`](Self::first), since the caller cannot know the total of a page it
/// has not fetched yet.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PageRequestRecord")]
pub struct PageRequest {
    pub(crate) number: i32,
    pub(crate) size: i32,
    pub(crate) total_elements: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sort: Option<Sort>,
}

impl PageRequest {
    /// Creates a page request, rejecting negative page numbers and sizes below one.
    pub fn new(number: i32, size: i32, sort: Option<Sort>) -> Result<Self, Error> {
        check_bounds(number, size)?;
        Ok(Self {
            number,
            size,
            total_elements: 0,
            sort,
        })
    }

    /// Unsorted shorthand for [`PageRequest::new`].
    pub fn of(number: i32, size: i32) -> Result<Self, Error> {
        Self::new(number, size, None)
    }

    pub fn with_total_elements(mut self, total_elements: i64) -> Self {
        self.total_elements = total_elements;
        self
    }

    pub fn page_number(&self) -> i32 {
        self.number
    }

    pub fn page_size(&self) -> i32 {
        self.size
    }

    /// Total element count as reported by the origin.
    pub fn total_elements(&self) -> i64 {
        self.total_elements
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Zero-based position of the first element of this page.
    pub fn offset(&self) -> i64 {
        i64::from(self.number) * i64::from(self.size)
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn next(&self) -> PageRequest {
        self.sibling(self.number.saturating_add(1))
    }

    /// The preceding page, or the receiver itself when already on page zero.
    ///
    /// Pair with [`has_previous`](Self::has_previous), or use
    /// [`previous_or_first`](Self::previous_or_first).
    pub fn previous(&self) -> Cow<'_, PageRequest> {
        if self.number == 0 {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.sibling(self.number.saturating_sub(1)))
        }
    }

    pub fn previous_or_first(&self) -> PageRequest {
        if self.has_previous() {
            self.previous().into_owned()
        } else {
            self.first()
        }
    }

    pub fn first(&self) -> PageRequest {
        self.sibling(0)
    }

    // Siblings inherit the receiver's size unchecked, so a hydrated request
    // with an invalid size still navigates instead of failing.
    fn sibling(&self, number: i32) -> PageRequest {
        PageRequest {
            number,
            size: self.size,
            total_elements: 0,
            sort: self.sort.clone(),
        }
    }
}

impl PartialEq for PageRequest {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.size == other.size && self.sort == other.sort
    }
}

impl Eq for PageRequest {}

impl Hash for PageRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.size.hash(state);
        self.sort.hash(state);
    }
}

pub(crate) fn check_bounds(number: i32, size: i32) -> Result<(), Error> {
    if number < 0 {
        return Err(Error::InvalidPageRequest(
            "Page number must not be less than zero!".to_string(),
        ));
    }
    if size < 1 {
        return Err(Error::InvalidPageRequest(
            "Page size must not be less than one!".to_string(),
        ));
    }
    Ok(())
}
