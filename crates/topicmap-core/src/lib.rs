//! Core types, joins and per-page queries for the topicmap dashboard.
//!
//! This crate is free of file-format and terminal dependencies. Storage
//! backends implement [`store::DatasetSource`]; the UI consumes the views
//! produced by [`query`].

pub mod advisor;
pub mod dataset;
pub mod document;
pub mod error;
pub mod format;
pub mod join;
pub mod manifest;
pub mod query;
pub mod store;
pub mod topic;

pub use dataset::Dataset;
pub use error::{Error, Result};
