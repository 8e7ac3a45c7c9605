//! Bounded LRU memo of loaded tables.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::table::{Table, TableName};

/// Per-store table memo. Least-recently-used tables are evicted once the
/// capacity is exceeded.
pub struct TableCache {
  inner: LruCache<TableName, Table>,
}

impl TableCache {
  /// Floor for [`TableCache::new`]; enough to hold every table at once.
  pub const MIN_CAPACITY: NonZeroUsize = NonZeroUsize::new(8).unwrap();

  /// A cache holding at least [`TableCache::MIN_CAPACITY`] tables.
  pub fn new(capacity: usize) -> Self {
    let capacity = NonZeroUsize::new(capacity)
      .map_or(Self::MIN_CAPACITY, |c| c.max(Self::MIN_CAPACITY));
    Self::bounded(capacity)
  }

  /// A cache with exactly `capacity` slots, bypassing the floor.
  pub(crate) fn bounded(capacity: NonZeroUsize) -> Self {
    Self { inner: LruCache::new(capacity) }
  }

  /// Look up `name`, marking it most recently used.
  pub fn get(&mut self, name: TableName) -> Option<Table> {
    self.inner.get(&name).cloned()
  }

  /// Insert `table`, returning the name of the table evicted to make room.
  pub fn insert(&mut self, name: TableName, table: Table) -> Option<TableName> {
    self
      .inner
      .push(name, table)
      .map(|(evicted, _)| evicted)
      .filter(|evicted| *evicted != name)
  }

  pub fn contains(&self, name: TableName) -> bool {
    self.inner.contains(&name)
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.inner.cap().get()
  }
}

impl Default for TableCache {
  fn default() -> Self {
    Self::bounded(Self::MIN_CAPACITY)
  }
}
