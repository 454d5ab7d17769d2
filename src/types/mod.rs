pub mod criterion;
pub mod observation;
pub mod page_range;
