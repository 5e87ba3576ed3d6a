//! Plain decoding records.
//!
//! serde fills these field by field with no checks; converting them into the
//! domain types is a separate step that is either unchecked (`From`) or
//! validating (`validate`).

use serde::Deserialize;

use super::{page_request::check_bounds, PageModel, PageRequest, Sort};
use crate::Error;

/// The `"page"` object of a paged response.
///
/// Missing numeric fields decode as 0 and a missing `"sort"` as unsorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequestRecord {
    pub number: i32,
    pub size: i32,
    pub total_elements: i64,
    pub sort: Option<Sort>,
}

impl PageRequestRecord {
    /// Converts into a [`PageRequest`], applying the same bounds as
    /// [`PageRequest::new`].
    pub fn validate(self) -> Result<PageRequest, Error> {
        check_bounds(self.number, self.size)?;
        Ok(self.into())
    }

    pub fn is_within_bounds(&self) -> bool {
        check_bounds(self.number, self.size).is_ok()
    }
}

/// Accepts whatever arrived over the wire, including negative page numbers
/// and a zero size.
impl From<PageRequestRecord> for PageRequest {
    fn from(record: PageRequestRecord) -> Self {
        PageRequest {
            number: record.number,
            size: record.size,
            total_elements: record.total_elements,
            sort: record.sort,
        }
    }
}

/// A whole paged response: `{"content": [...], "page": {...}}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageRecord<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,

    #[serde(rename = "page", default)]
    pub pageable: Option<PageRequestRecord>,
}

impl<T> PageRecord<T> {
    pub fn validate(self) -> Result<PageModel<T>, Error> {
        let pageable = self.pageable.map(PageRequestRecord::validate).transpose()?;
        Ok(PageModel::new(self.content, pageable))
    }
}

impl<T> From<PageRecord<T>> for PageModel<T> {
    fn from(record: PageRecord<T>) -> Self {
        PageModel::new(record.content, record.pageable.map(PageRequest::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero() {
        let record: PageRequestRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, PageRequestRecord::default());
        assert!(!record.is_within_bounds());
    }

    #[test]
    fn unchecked_conversion_keeps_invalid_values() {
        let record = PageRequestRecord {
            number: -3,
            size: 0,
            total_elements: 7,
            sort: None,
        };
        let request = PageRequest::from(record.clone());
        assert_eq!(request.page_number(), -3);
        assert_eq!(request.page_size(), 0);
        assert_eq!(request.total_elements(), 7);

        assert!(record.validate().is_err());
    }

    #[test]
    fn validate_keeps_reported_total() {
        let record = PageRequestRecord {
            number: 1,
            size: 10,
            total_elements: 35,
            sort: None,
        };
        let request = record.validate().unwrap();
        assert_eq!(request.total_elements(), 35);
        assert_eq!(request.offset(), 10);
    }

    #[test]
    fn page_record_validation_checks_pageable() {
        let record: PageRecord<u32> =
            serde_json::from_str(r#"{"content": [1], "page": {"number": 0, "size": 0}}"#).unwrap();
        assert!(record.clone().validate().is_err());
        let model = PageModel::from(record);
        assert_eq!(model.size(), 0);
    }

    #[test]
    fn page_record_without_pageable_validates() {
        let record: PageRecord<u32> = serde_json::from_str(r#"{"content": [1, 2]}"#).unwrap();
        let model = record.validate().unwrap();
        assert!(model.pageable().is_none());
        assert_eq!(model.content(), &[1, 2]);
    }
}
