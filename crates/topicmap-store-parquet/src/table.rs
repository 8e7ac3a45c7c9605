//! Names of the exported tables.

use std::sync::Arc;

use arrow::record_batch::RecordBatch;

/// A whole table materialised as one record batch. Cheap to clone.
pub type Table = Arc<RecordBatch>;

/// The tables published by the pipeline, one parquet file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableName {
  Docs,
  Topics,
  /// Revised topic set; preferred over [`TableName::Topics`] when present.
  TopicsCurrent,
  DocTopics,
  TopicTrends,
  AdvisorProfiles,
  AdvisorTopics,
}

impl TableName {
  pub const ALL: [TableName; 7] = [
    TableName::Docs,
    TableName::Topics,
    TableName::TopicsCurrent,
    TableName::DocTopics,
    TableName::TopicTrends,
    TableName::AdvisorProfiles,
    TableName::AdvisorTopics,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      TableName::Docs => "docs",
      TableName::Topics => "topics",
      TableName::TopicsCurrent => "topics_current",
      TableName::DocTopics => "doc_topics",
      TableName::TopicTrends => "topic_trends",
      TableName::AdvisorProfiles => "advisor_profiles",
      TableName::AdvisorTopics => "advisor_topics",
    }
  }

  pub fn file_name(self) -> String {
    format!("{}.parquet", self.as_str())
  }
}

impl std::fmt::Display for TableName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
