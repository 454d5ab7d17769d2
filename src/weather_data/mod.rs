pub mod error;
pub(crate) mod fetcher;
pub mod page_source;
pub mod response;
