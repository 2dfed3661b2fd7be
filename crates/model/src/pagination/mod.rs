pub mod page;

pub use page::{PageRequest, PageWindow};
