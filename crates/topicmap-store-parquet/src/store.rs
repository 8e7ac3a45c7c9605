//! [`ParquetStore`]: the parquet implementation of [`DatasetSource`].

use std::{
  cell::{Cell, OnceCell, RefCell},
  fs::File,
  io::ErrorKind,
  path::{Path, PathBuf},
  sync::Arc,
};

use arrow::{compute::concat_batches, record_batch::RecordBatch};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use topicmap_core::{
  advisor::{AdvisorProfile, AdvisorTopic},
  document::{Document, DocumentTopic},
  manifest::Manifest,
  store::DatasetSource,
  topic::{Topic, TopicTrend},
};

use crate::{
  Error, Result,
  cache::TableCache,
  schema,
  table::{Table, TableName},
};

/// File name of the optional provenance record.
pub const MANIFEST_FILE: &str = "_manifest.json";

// ─── Store ───────────────────────────────────────────────────────────────────

/// Read-only view over one export directory.
///
/// Tables are memoized in a [`TableCache`]; the manifest is read at most
/// once. The store is meant for a single thread and is not `Sync`.
pub struct ParquetStore {
  data_dir: PathBuf,
  cache:    RefCell<TableCache>,
  manifest: OnceCell<Manifest>,
  reads:    Cell<usize>,
}

impl ParquetStore {
  /// A store over `data_dir` with the minimum cache capacity.
  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self::with_cache(data_dir, TableCache::default())
  }

  /// A store over `data_dir` caching up to `capacity` tables (at least 8).
  pub fn with_capacity(data_dir: impl Into<PathBuf>, capacity: usize) -> Self {
    Self::with_cache(data_dir, TableCache::new(capacity))
  }

  pub(crate) fn with_cache(data_dir: impl Into<PathBuf>, cache: TableCache) -> Self {
    Self {
      data_dir: data_dir.into(),
      cache:    RefCell::new(cache),
      manifest: OnceCell::new(),
      reads:    Cell::new(0),
    }
  }

  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  /// Number of parquet files physically read so far.
  pub fn reads(&self) -> usize {
    self.reads.get()
  }

  fn path_of(&self, name: TableName) -> PathBuf {
    self.data_dir.join(name.file_name())
  }

  /// Load `name`, from the cache when possible.
  pub fn load_table(&self, name: TableName) -> Result<Table> {
    if let Some(table) = self.cache.borrow_mut().get(name) {
      debug!(table = %name, "cache hit");
      return Ok(table);
    }

    debug!(table = %name, "cache miss");
    let table = Arc::new(self.read_parquet(name)?);
    if let Some(evicted) = self.cache.borrow_mut().insert(name, Arc::clone(&table)) {
      debug!(table = %evicted, "evicted from cache");
    }
    Ok(table)
  }

  /// The revised topics table when published, else the default one.
  pub fn resolve_topics_table(&self) -> Result<(TableName, Table)> {
    let name = if self.path_of(TableName::TopicsCurrent).exists() {
      TableName::TopicsCurrent
    } else {
      TableName::Topics
    };
    Ok((name, self.load_table(name)?))
  }

  /// The provenance record, read once. Empty when absent or unparseable.
  pub fn load_manifest(&self) -> Manifest {
    self
      .manifest
      .get_or_init(|| read_manifest(&self.data_dir.join(MANIFEST_FILE)))
      .clone()
  }

  fn read_parquet(&self, name: TableName) -> Result<RecordBatch> {
    let path = self.path_of(name);
    let file = File::open(&path).map_err(|source| match source.kind() {
      ErrorKind::NotFound => Error::MissingTable { name: name.as_str(), path: path.clone() },
      _ => Error::Io { path: path.clone(), source },
    })?;
    self.reads.set(self.reads.get() + 1);

    let parquet_err = |source| Error::Parquet { name: name.as_str(), source };
    let arrow_err = |source| Error::Arrow { name: name.as_str(), source };

    let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(parquet_err)?;
    let schema = Arc::clone(builder.schema());
    let batches = builder
      .build()
      .map_err(parquet_err)?
      .collect::<Result<Vec<_>, _>>()
      .map_err(arrow_err)?;
    let batch = concat_batches(&schema, &batches).map_err(arrow_err)?;

    debug!(table = %name, rows = batch.num_rows(), path = %path.display(), "read parquet");
    Ok(batch)
  }

  /// Load `name` and decode it into typed rows.
  fn rows<T: DeserializeOwned>(&self, name: TableName) -> Result<Vec<T>> {
    let table = self.load_table(name)?;
    decode(name, &table)
  }
}

fn decode<T: DeserializeOwned>(name: TableName, table: &RecordBatch) -> Result<Vec<T>> {
  let projected = schema::project(name, table)?;
  serde_arrow::from_record_batch(&projected)
    .map_err(|source| Error::Decode { name: name.as_str(), source })
}

fn read_manifest(path: &Path) -> Manifest {
  let raw = match std::fs::read_to_string(path) {
    Ok(raw) => raw,
    Err(e) if e.kind() == ErrorKind::NotFound => {
      debug!(path = %path.display(), "no manifest");
      return Manifest::empty();
    }
    Err(e) => {
      warn!(path = %path.display(), error = %e, "manifest unreadable");
      return Manifest::empty();
    }
  };

  match serde_json::from_str(&raw) {
    Ok(value) => Manifest::from_value(value),
    Err(e) => {
      warn!(path = %path.display(), error = %e, "manifest is not valid JSON");
      Manifest::empty()
    }
  }
}

// ─── DatasetSource impl ──────────────────────────────────────────────────────

impl DatasetSource for ParquetStore {
  type Error = Error;

  fn documents(&self) -> Result<Vec<Document>> {
    self.rows(TableName::Docs)
  }

  fn topics(&self) -> Result<Vec<Topic>> {
    let (name, table) = self.resolve_topics_table()?;
    decode(name, &table)
  }

  fn doc_topics(&self) -> Result<Vec<DocumentTopic>> {
    self.rows(TableName::DocTopics)
  }

  fn topic_trends(&self) -> Result<Vec<TopicTrend>> {
    self.rows(TableName::TopicTrends)
  }

  fn advisor_profiles(&self) -> Result<Vec<AdvisorProfile>> {
    self.rows(TableName::AdvisorProfiles)
  }

  fn advisor_topics(&self) -> Result<Vec<AdvisorTopic>> {
    self.rows(TableName::AdvisorTopics)
  }

  fn manifest(&self) -> Manifest {
    self.load_manifest()
  }
}
