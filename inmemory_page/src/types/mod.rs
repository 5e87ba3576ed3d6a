mod sort;
pub use self::sort::{Direction, NullHandling, Order, Sort};

mod page_request;
pub use self::page_request::PageRequest;

mod page;
pub use self::page::PageModel;

mod record;
pub use self::record::{PageRecord, PageRequestRecord};
