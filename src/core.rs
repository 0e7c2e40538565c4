pub mod catalog;
pub mod error;
pub mod estimate;
pub mod model;
pub mod module;
pub mod pricing;
pub mod query;
