mod common;
pub use self::common::Query;

mod page_request;
