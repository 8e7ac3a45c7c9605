//! Parquet backend for the topicmap dashboard.
//!
//! Reads the exports of the offline topic-modeling pipeline from one
//! directory, memoizing each table in an LRU cache owned by the store.

mod cache;
mod schema;
mod store;

pub mod error;
pub mod table;

pub use cache::TableCache;
pub use error::{Error, Result};
pub use store::{MANIFEST_FILE, ParquetStore};
pub use table::{Table, TableName};

#[cfg(test)]
mod tests;
