//! The [`Query`] trait shared by everything that renders URL parameters.

use url::Url;

/// Renders a value as URL query parameters.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
