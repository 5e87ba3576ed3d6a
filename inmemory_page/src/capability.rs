//! Abstract pagination capabilities.
//!
//! Code that consumes pages can name `Box<dyn Page<T>>` or `Box<dyn Pageable>`
//! in its own types; decoding resolves them to [`PageModel`] and
//! [`PageRequest`] through the [`TypeRegistry`](crate::TypeRegistry).

use crate::types::{PageModel, PageRequest, Sort};

/// Describes which slice of a result set to view.
pub trait Pageable {
    fn page_number(&self) -> i32;
    fn page_size(&self) -> i32;
    fn offset(&self) -> i64;
    fn sort(&self) -> Option<&Sort>;
    fn has_previous(&self) -> bool;
    fn next(&self) -> PageRequest;
    fn previous_or_first(&self) -> PageRequest;
    fn first(&self) -> PageRequest;
}

/// A read-only slice of a result set together with its pagination metadata.
pub trait Page<T> {
    fn content(&self) -> &[T];
    fn pageable(&self) -> Option<&PageRequest>;
    fn total_pages(&self) -> i64;
    fn total_elements(&self) -> i64;
    fn number(&self) -> i32;
    fn size(&self) -> i32;
    fn next_pageable(&self) -> Option<PageRequest>;
    fn previous_pageable(&self) -> Option<PageRequest>;

    fn number_of_elements(&self) -> usize {
        self.content().len()
    }

    fn has_content(&self) -> bool {
        !self.content().is_empty()
    }

    fn has_next(&self) -> bool {
        self.number() < i32::MAX && i64::from(self.number()) + 1 < self.total_pages()
    }

    fn is_last(&self) -> bool {
        !self.has_next()
    }

    fn has_previous(&self) -> bool {
        self.number() > 0
    }

    fn is_first(&self) -> bool {
        !self.has_previous()
    }

    fn sort(&self) -> Option<&Sort> {
        self.pageable().and_then(PageRequest::sort)
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content().iter()
    }
}

impl Pageable for PageRequest {
    fn page_number(&self) -> i32 {
        PageRequest::page_number(self)
    }

    fn page_size(&self) -> i32 {
        PageRequest::page_size(self)
    }

    fn offset(&self) -> i64 {
        PageRequest::offset(self)
    }

    fn sort(&self) -> Option<&Sort> {
        PageRequest::sort(self)
    }

    fn has_previous(&self) -> bool {
        PageRequest::has_previous(self)
    }

    fn next(&self) -> PageRequest {
        PageRequest::next(self)
    }

    fn previous_or_first(&self) -> PageRequest {
        PageRequest::previous_or_first(self)
    }

    fn first(&self) -> PageRequest {
        PageRequest::first(self)
    }
}

impl<T> Page<T> for PageModel<T> {
    fn content(&self) -> &[T] {
        PageModel::content(self)
    }

    fn pageable(&self) -> Option<&PageRequest> {
        PageModel::pageable(self)
    }

    fn total_pages(&self) -> i64 {
        PageModel::total_pages(self)
    }

    fn total_elements(&self) -> i64 {
        PageModel::total_elements(self)
    }

    fn number(&self) -> i32 {
        PageModel::number(self)
    }

    fn size(&self) -> i32 {
        PageModel::size(self)
    }

    fn next_pageable(&self) -> Option<PageRequest> {
        PageModel::next_pageable(self)
    }

    fn previous_pageable(&self) -> Option<PageRequest> {
        PageModel::previous_pageable(self)
    }

    fn number_of_elements(&self) -> usize {
        PageModel::number_of_elements(self)
    }

    fn has_content(&self) -> bool {
        PageModel::has_content(self)
    }

    fn has_next(&self) -> bool {
        PageModel::has_next(self)
    }

    fn is_last(&self) -> bool {
        PageModel::is_last(self)
    }

    fn has_previous(&self) -> bool {
        PageModel::has_previous(self)
    }

    fn is_first(&self) -> bool {
        PageModel::is_first(self)
    }

    fn sort(&self) -> Option<&Sort> {
        PageModel::sort(self)
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        PageModel::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_objects_agree_with_the_model() {
        let request = PageRequest::of(1, 2).unwrap().with_total_elements(5);
        let model = PageModel::new(vec![3, 4], Some(request));
        let page: &dyn Page<i32> = &model;
        assert_eq!(page.total_pages(), model.total_pages());
        assert_eq!(page.total_elements(), model.total_elements());
        assert_eq!(page.has_next(), model.has_next());
        assert_eq!(page.is_first(), model.is_first());
        assert_eq!(page.number_of_elements(), 2);
        assert_eq!(page.iter().sum::<i32>(), 7);
    }

    #[test]
    fn trait_object_stops_at_last_addressable_page() {
        let request = PageRequest::of(i32::MAX, 1).unwrap().with_total_elements(i64::MAX);
        let model = PageModel::new(vec![0u8], Some(request));
        let page: &dyn Page<u8> = &model;
        assert!(!page.has_next());
        assert!(page.next_pageable().is_none());
    }

    #[test]
    fn pageable_object_navigates() {
        let request = PageRequest::of(2, 10).unwrap();
        let pageable: &dyn Pageable = &request;
        assert_eq!(pageable.offset(), 20);
        assert_eq!(pageable.next().page_number(), 3);
        assert_eq!(pageable.previous_or_first().page_number(), 1);
        assert_eq!(pageable.first().page_number(), 0);
        assert!(pageable.sort().is_none());
    }
}
