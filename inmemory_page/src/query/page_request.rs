//! `page`, `size` and `sort` parameters for asking the origin for a page.

use url::Url;

use super::Query;
use crate::types::{PageRequest, Sort};

impl Query for Sort {
    /// One `sort=<property>,<direction>` pair per order, with `,ignorecase`
    /// appended to case-insensitive orders.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for order in self.iter() {
            let mut value = format!("{},{}", order.property(), order.direction());
            if order.is_ignore_case() {
                value.push_str(",ignorecase");
            }
            url.query_pairs_mut().append_pair("sort", &value);
        }
        url
    }
}

impl Query for PageRequest {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page_number().to_string())
            .append_pair("size", &self.page_size().to_string());
        match self.sort() {
            Some(sort) => sort.add_to_url(&url),
            None => url,
        }
    }
}
