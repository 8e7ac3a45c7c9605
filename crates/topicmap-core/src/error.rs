//! Error types for `topicmap-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A `[id] label` selection string whose id could not be decoded.
  #[error("invalid selection: {0:?}")]
  InvalidSelection(String),

  /// A storage backend failed to produce a required dataset.
  #[error("dataset load failed: {0}")]
  Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
