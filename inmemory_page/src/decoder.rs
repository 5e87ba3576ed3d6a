//! Decoding entry points that honour the [`TypeRegistry`].

use once_cell::sync::OnceCell;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};

use crate::capability::{Page, Pageable};
use crate::registry::{Capability, Hydration, Target, TypeRegistry};
use crate::response::truncate_body;
use crate::types::{PageModel, PageRecord, PageRequest, PageRequestRecord};
use crate::Error;

static GLOBAL: OnceCell<PageDecoder> = OnceCell::new();

pub(crate) fn install(registry: TypeRegistry) -> Result<(), Error> {
    GLOBAL
        .set(PageDecoder::new(registry))
        .map_err(|_| Error::AlreadyInstalled)
}

/// Builds pages and page requests from JSON according to a frozen
/// [`TypeRegistry`].
#[derive(Clone, Debug)]
pub struct PageDecoder {
    registry: TypeRegistry,
}

impl Default for PageDecoder {
    fn default() -> Self {
        Self::new(TypeRegistry::with_paging_module())
    }
}

impl PageDecoder {
    pub fn new(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// The process-wide decoder. Uses the registry passed to
    /// [`TypeRegistry::install`], or the paging module if none was installed
    /// before the first call.
    pub fn global() -> &'static PageDecoder {
        GLOBAL.get_or_init(PageDecoder::default)
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Decodes `json` into whatever type stands in for [`Capability::Page`].
    pub fn decode_page<T>(&self, json: &str) -> Result<Box<dyn Page<T>>, Error>
    where
        T: DeserializeOwned + 'static,
    {
        let record = parse::<PageRecord<T>>(json)?;
        self.materialize_page(record)
    }

    pub fn page_from_slice<T>(&self, bytes: &[u8]) -> Result<Box<dyn Page<T>>, Error>
    where
        T: DeserializeOwned + 'static,
    {
        let record = serde_json::from_slice::<PageRecord<T>>(bytes).map_err(|e| {
            tracing::error!(
                "Failed to parse page: {} | body: {}",
                e,
                truncate_body(&String::from_utf8_lossy(bytes))
            );
            Error::Decode(e)
        })?;
        self.materialize_page(record)
    }

    pub fn page_from_value<T>(&self, value: serde_json::Value) -> Result<Box<dyn Page<T>>, Error>
    where
        T: DeserializeOwned + 'static,
    {
        let record = serde_json::from_value::<PageRecord<T>>(value)?;
        self.materialize_page(record)
    }

    /// Decodes `json` into whatever type stands in for [`Capability::Pageable`].
    pub fn decode_pageable(&self, json: &str) -> Result<Box<dyn Pageable>, Error> {
        let record = parse::<PageRequestRecord>(json)?;
        self.materialize_pageable(record)
    }

    /// Decodes straight into [`PageModel`], still applying the registry's
    /// hydration mode.
    pub fn decode_model<T>(&self, json: &str) -> Result<PageModel<T>, Error>
    where
        T: DeserializeOwned,
    {
        let record = parse::<PageRecord<T>>(json)?;
        self.hydrate_page(record)
    }

    pub fn materialize_page<T>(&self, record: PageRecord<T>) -> Result<Box<dyn Page<T>>, Error>
    where
        T: 'static,
    {
        match self.registry.resolve(Capability::Page)? {
            Target::PageModel => {
                let page = self.hydrate_page(record)?;
                tracing::debug!(
                    "Materialised page {} with {} elements",
                    page.number(),
                    page.number_of_elements()
                );
                Ok(Box::new(page))
            }
            target => Err(Error::IncompatibleBinding {
                capability: Capability::Page,
                target,
            }),
        }
    }

    pub fn materialize_pageable(
        &self,
        record: PageRequestRecord,
    ) -> Result<Box<dyn Pageable>, Error> {
        match self.registry.resolve(Capability::Pageable)? {
            Target::PageRequest => Ok(Box::new(self.hydrate_request(record)?)),
            target => Err(Error::IncompatibleBinding {
                capability: Capability::Pageable,
                target,
            }),
        }
    }

    pub(crate) fn hydrate_page<T>(&self, record: PageRecord<T>) -> Result<PageModel<T>, Error> {
        let pageable = record
            .pageable
            .map(|pageable| self.hydrate_request(pageable))
            .transpose()?;
        Ok(PageModel::new(record.content, pageable))
    }

    fn hydrate_request(&self, record: PageRequestRecord) -> Result<PageRequest, Error> {
        match self.registry.hydration() {
            Hydration::Strict => record.validate(),
            Hydration::Lenient => {
                if !record.is_within_bounds() {
                    tracing::warn!(
                        "Accepting out-of-range page request (number {}, size {})",
                        record.number,
                        record.size
                    );
                }
                Ok(record.into())
            }
        }
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(json).map_err(|e| {
        tracing::error!("Failed to parse page: {} | body: {}", e, truncate_body(json));
        Error::Decode(e)
    })
}

impl<'de, T> Deserialize<'de> for Box<dyn Page<T>>
where
    T: Deserialize<'de> + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = PageRecord::<T>::deserialize(deserializer)?;
        PageDecoder::global()
            .materialize_page(record)
            .map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Box<dyn Pageable> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = PageRequestRecord::deserialize(deserializer)?;
        PageDecoder::global()
            .materialize_pageable(record)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sort;

    const PAYLOAD: &str = r#"{
        "content": ["a", "b", "c"],
        "page": {"number": 2, "size": 3, "totalElements": 5}
    }"#;

    fn decoder(hydration: Hydration) -> PageDecoder {
        PageDecoder::new(TypeRegistry::with_paging_module().with_hydration(hydration))
    }

    #[test]
    fn decode_page_substitutes_page_model() {
        let page = decoder(Hydration::Lenient)
            .decode_page::<String>(PAYLOAD)
            .unwrap();
        assert_eq!(page.content(), &["a", "b", "c"]);
        assert_eq!(page.total_elements(), 9);
        assert_eq!(page.total_pages(), 2);
        assert!(page.is_last());
        assert!(page.sort().is_none());
    }

    #[test]
    fn unmapped_page_capability_fails() {
        let decoder = PageDecoder::new(TypeRegistry::new());
        let result = decoder.decode_page::<String>(PAYLOAD);
        assert!(matches!(result, Err(Error::Unmapped(Capability::Page))));
    }

    #[test]
    fn decode_pageable_substitutes_page_request() {
        let pageable = decoder(Hydration::Lenient)
            .decode_pageable(r#"{"number": 4, "size": 25, "sort": [{"property": "id", "direction": "DESC"}]}"#)
            .unwrap();
        assert_eq!(pageable.page_number(), 4);
        assert_eq!(pageable.offset(), 100);
        assert!(pageable.sort().is_some_and(Sort::is_sorted));
    }

    #[test]
    fn lenient_hydration_accepts_invalid_values() {
        let json = r#"{"content": [1], "page": {"number": -1, "size": 0, "totalElements": 1}}"#;
        let page = decoder(Hydration::Lenient).decode_model::<u8>(json).unwrap();
        assert_eq!(page.number(), -1);
        assert_eq!(page.size(), 0);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn strict_hydration_rejects_invalid_values() {
        let json = r#"{"content": [1], "page": {"number": 0, "size": 0, "totalElements": 1}}"#;
        let result = decoder(Hydration::Strict).decode_model::<u8>(json);
        assert!(matches!(result, Err(Error::InvalidPageRequest(_))));

        let result = decoder(Hydration::Strict).decode_pageable(r#"{"number": -1, "size": 5}"#);
        assert!(matches!(result, Err(Error::InvalidPageRequest(_))));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let result = decoder(Hydration::Lenient).decode_page::<u8>("{not json}");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn slice_and_value_entry_points() {
        let decoder = decoder(Hydration::Lenient);
        let from_slice = decoder.page_from_slice::<String>(PAYLOAD.as_bytes()).unwrap();
        let value: serde_json::Value = serde_json::from_str(PAYLOAD).unwrap();
        let from_value = decoder.page_from_value::<String>(value).unwrap();
        assert_eq!(from_slice.content(), from_value.content());
        assert_eq!(from_slice.pageable(), from_value.pageable());
    }
}
