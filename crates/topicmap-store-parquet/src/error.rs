//! Error type for `topicmap-store-parquet`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required export is absent. Fatal for the session.
  #[error("required dataset `{name}` not found at {}", path.display())]
  MissingTable { name: &'static str, path: PathBuf },

  #[error("i/o error reading {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("dataset `{name}` is not valid parquet: {source}")]
  Parquet {
    name:   &'static str,
    source: parquet::errors::ParquetError,
  },

  #[error("dataset `{name}`: {source}")]
  Arrow {
    name:   &'static str,
    source: arrow::error::ArrowError,
  },

  #[error("dataset `{table}` has no column `{column}`")]
  MissingColumn {
    table:  &'static str,
    column: &'static str,
  },

  #[error("dataset `{name}` could not be decoded: {source}")]
  Decode {
    name:   &'static str,
    source: serde_arrow::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
