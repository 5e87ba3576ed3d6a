//! Read-only reconstruction of paged API results on the consuming side.
//!
//! A paged JSON response (`{"content": [...], "page": {...}}`) decodes into a
//! [`PageModel`] carrying the content and its [`PageRequest`]. Callers that
//! only name the abstract [`Page`] or [`Pageable`] capabilities get the
//! concrete model through the [`TypeRegistry`] consulted by the [`PageDecoder`].

mod capability;
mod decoder;
mod errors;
mod query;
mod registry;
mod response;
pub mod types;

pub use self::capability::{Page, Pageable};
pub use self::decoder::PageDecoder;
pub use self::errors::Error;
pub use self::query::Query;
pub use self::registry::{
    Capability, Hydration, Module, PagingModule, Target, TypeRegistry, HYDRATION_ENV,
};
pub use self::response::read_page;
pub use self::types::{Direction, NullHandling, Order, PageModel, PageRequest, Sort};
