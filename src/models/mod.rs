// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod quote;
pub mod result_set;

pub use quote::Quote;
pub use result_set::ResultSet;
