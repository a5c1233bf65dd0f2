//! Data transformation logic
//!
//! Products are turned into output events by [`flatten::flatten_product`].

pub mod flatten;

pub use flatten::{flatten_branch, flatten_product};
