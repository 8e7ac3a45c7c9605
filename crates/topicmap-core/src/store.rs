//! The `DatasetSource` trait.
//!
//! Implemented by storage backends (e.g. `topicmap-store-parquet`). The
//! session [`Dataset`](crate::Dataset) is loaded through this abstraction,
//! never from a concrete backend.

use crate::{
  advisor::{AdvisorProfile, AdvisorTopic},
  document::{Document, DocumentTopic},
  manifest::Manifest,
  topic::{Topic, TopicTrend},
};

/// Read-only access to the exported tables of one dataset snapshot.
///
/// Every table method is fatal on failure: a missing or unreadable table
/// aborts the session. The manifest is optional and never fails.
pub trait DatasetSource {
  type Error: std::error::Error + Send + Sync + 'static;

  fn documents(&self) -> Result<Vec<Document>, Self::Error>;

  /// The topics table, preferring a revised `current` variant when the
  /// backend has one.
  fn topics(&self) -> Result<Vec<Topic>, Self::Error>;

  fn doc_topics(&self) -> Result<Vec<DocumentTopic>, Self::Error>;

  fn topic_trends(&self) -> Result<Vec<TopicTrend>, Self::Error>;

  fn advisor_profiles(&self) -> Result<Vec<AdvisorProfile>, Self::Error>;

  fn advisor_topics(&self) -> Result<Vec<AdvisorTopic>, Self::Error>;

  /// Provenance record; empty when absent or unreadable.
  fn manifest(&self) -> Manifest;
}
