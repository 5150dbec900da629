pub mod aggregator;
pub mod page_model;
pub mod registry;
