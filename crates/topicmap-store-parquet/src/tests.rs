//! Integration tests for `ParquetStore` against fixture exports in a
//! temporary directory.

use std::{fs::File, num::NonZeroUsize, path::Path, sync::Arc};

use arrow::datatypes::FieldRef;
use parquet::arrow::ArrowWriter;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_arrow::schema::{SchemaLike, TracingOptions};
use tempfile::TempDir;
use topicmap_core::{
  Dataset,
  advisor::{AdvisorProfile, AdvisorTopic},
  document::DocumentTopic,
  query,
  store::DatasetSource,
  topic::{Topic, TopicTrend},
};

use crate::{Error, MANIFEST_FILE, ParquetStore, TableCache, TableName};

// ─── Fixtures ────────────────────────────────────────────────────────────────

/// `docs` as some pipelines write it: integer ids, float years.
#[derive(Serialize, Deserialize)]
struct RawDoc {
  #[serde(rename = "DOC_ID")]
  doc_id:          i64,
  ano:             Option<f64>,
  titulo:          Option<String>,
  orientador_nome: Option<String>,
  orientador_id:   Option<i64>,
  url:             Option<String>,
}

#[derive(Serialize, Deserialize)]
struct RawDocTopic {
  #[serde(rename = "DOC_ID")]
  doc_id: i64,
  topic:  i64,
  prob:   Option<f64>,
}

fn write<T>(dir: &Path, name: TableName, rows: &[T])
where
  T: Serialize + for<'de> Deserialize<'de>,
{
  let fields = Vec::<FieldRef>::from_type::<T>(TracingOptions::default()).expect("trace schema");
  let batch = serde_arrow::to_record_batch(&fields, &rows).expect("record batch");
  let file = File::create(dir.join(name.file_name())).expect("create parquet");
  let mut writer = ArrowWriter::try_new(file, batch.schema(), None).expect("writer");
  writer.write(&batch).expect("write batch");
  writer.close().expect("close writer");
}

fn raw_doc(id: i64, year: f64, advisor_id: i64, advisor: &str) -> RawDoc {
  RawDoc {
    doc_id:          id,
    ano:             Some(year),
    titulo:          Some(format!("Thesis {id}")),
    orientador_nome: Some(advisor.into()),
    orientador_id:   Some(advisor_id),
    url:             None,
  }
}

fn topic(id: i64, label: &str) -> Topic {
  Topic { topic: id, label: Some(label.into()), keywords: Some("a, b, c".into()) }
}

/// Writes every required table.
fn export_dir() -> TempDir {
  let dir = tempfile::tempdir().expect("tempdir");
  let p = dir.path();

  write(p, TableName::Docs, &[
    raw_doc(10, 2020.0, 1, "Ana Souza"),
    raw_doc(11, 2021.0, 1, "Ana Souza"),
    raw_doc(12, 2022.0, 2, "Bruno Lima"),
  ]);
  write(p, TableName::Topics, &[topic(-1, "Outliers"), topic(0, "Redes"), topic(1, "IA")]);
  write(p, TableName::DocTopics, &[
    RawDocTopic { doc_id: 10, topic: 0, prob: Some(0.8) },
    RawDocTopic { doc_id: 11, topic: 1, prob: Some(0.7) },
    RawDocTopic { doc_id: 12, topic: -1, prob: None },
    RawDocTopic { doc_id: 99, topic: 0, prob: Some(0.5) },
  ]);
  write(p, TableName::TopicTrends, &[
    TopicTrend { topic: 0, year: 2020, share: 0.2, n_docs: 4 },
    TopicTrend { topic: 0, year: 2021, share: 0.3, n_docs: 6 },
  ]);
  write(p, TableName::AdvisorProfiles, &[
    AdvisorProfile {
      advisor_id:   "1".into(),
      advisor_name: Some("Ana Souza".into()),
      thesis_count: 2,
      years_active: 2,
      top_topics:   Some("Redes; IA".into()),
    },
    AdvisorProfile {
      advisor_id:   "2".into(),
      advisor_name: Some("Bruno Lima".into()),
      thesis_count: 1,
      years_active: 1,
      top_topics:   None,
    },
  ]);
  write(p, TableName::AdvisorTopics, &[AdvisorTopic {
    advisor_id: "1".into(),
    topic:      0,
    n_docs:     1,
    share:      Some(0.5),
  }]);

  dir
}

// ─── Cache ───────────────────────────────────────────────────────────────────

#[test]
fn second_load_is_a_cache_hit() {
  let dir = export_dir();
  let store = ParquetStore::new(dir.path());
  assert_eq!(store.data_dir(), dir.path());

  let first = store.load_table(TableName::Docs).unwrap();
  let second = store.load_table(TableName::Docs).unwrap();

  assert_eq!(store.reads(), 1);
  assert!(Arc::ptr_eq(&first, &second));
  assert_eq!(first, second);
}

#[test]
fn cache_hit_survives_file_removal() {
  let dir = export_dir();
  let store = ParquetStore::new(dir.path());
  let first = store.load_table(TableName::TopicTrends).unwrap();

  std::fs::remove_file(dir.path().join(TableName::TopicTrends.file_name())).unwrap();
  let again = store.load_table(TableName::TopicTrends).unwrap();
  assert_eq!(first, again);
  assert_eq!(store.reads(), 1);
}

#[test]
fn evicted_table_is_read_again() {
  let dir = export_dir();
  let store = ParquetStore::with_cache(dir.path(), TableCache::bounded(NonZeroUsize::new(2).unwrap()));

  store.load_table(TableName::Docs).unwrap();
  store.load_table(TableName::DocTopics).unwrap();
  store.load_table(TableName::Docs).unwrap(); // hit; doc_topics is now oldest
  store.load_table(TableName::TopicTrends).unwrap(); // evicts doc_topics
  assert_eq!(store.reads(), 3);

  store.load_table(TableName::Docs).unwrap();
  assert_eq!(store.reads(), 3);
  store.load_table(TableName::DocTopics).unwrap();
  assert_eq!(store.reads(), 4);
}

#[test]
fn every_table_fits_in_default_cache() {
  let dir = export_dir();
  write(dir.path(), TableName::TopicsCurrent, &[topic(0, "Redes v2")]);
  let store = ParquetStore::new(dir.path());

  for name in TableName::ALL {
    store.load_table(name).unwrap();
  }
  for name in TableName::ALL {
    store.load_table(name).unwrap();
  }
  assert_eq!(store.reads(), TableName::ALL.len());
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn missing_required_table_names_the_dataset() {
  let dir = export_dir();
  std::fs::remove_file(dir.path().join("docs.parquet")).unwrap();
  let store = ParquetStore::new(dir.path());

  let err = store.documents().unwrap_err();
  assert!(matches!(err, Error::MissingTable { name: "docs", .. }));
  assert!(err.to_string().contains("`docs`"));

  let err = Dataset::load(&store).unwrap_err();
  assert!(err.to_string().contains("docs"));
}

#[test]
fn corrupt_file_is_a_parquet_error() {
  let dir = export_dir();
  std::fs::write(dir.path().join("topic_trends.parquet"), b"definitely not parquet").unwrap();
  let store = ParquetStore::new(dir.path());

  assert!(matches!(
    store.topic_trends(),
    Err(Error::Parquet { name: "topic_trends", .. })
  ));
}

#[test]
fn missing_column_is_reported() {
  #[derive(Serialize, Deserialize)]
  struct NoShare {
    topic: i64,
    ano:   i64,
  }

  let dir = export_dir();
  write(dir.path(), TableName::TopicTrends, &[NoShare { topic: 1, ano: 2020 }]);
  let store = ParquetStore::new(dir.path());

  assert!(matches!(
    store.topic_trends(),
    Err(Error::MissingColumn { table: "topic_trends", column: "share" })
  ));
}

// ─── Decoding ────────────────────────────────────────────────────────────────

#[test]
fn integer_keys_and_float_years_are_coerced() {
  let dir = export_dir();
  let store = ParquetStore::new(dir.path());

  let docs = store.documents().unwrap();
  assert_eq!(docs.len(), 3);
  assert_eq!(docs[0].doc_id, "10");
  assert_eq!(docs[0].year, Some(2020));
  assert_eq!(docs[0].advisor_id.as_deref(), Some("1"));
  assert_eq!(docs[0].url, None);

  let dts = store.doc_topics().unwrap();
  assert_eq!(dts[2], DocumentTopic { doc_id: "12".into(), topic: -1, prob: None });
}

#[test]
fn float_advisor_ids_join_integer_profiles() {
  /// `docs` with the advisor id column written as a nullable float.
  #[derive(Serialize, Deserialize)]
  struct FloatKeyDoc {
    #[serde(rename = "DOC_ID")]
    doc_id:          i64,
    ano:             Option<i64>,
    titulo:          Option<String>,
    orientador_nome: Option<String>,
    orientador_id:   Option<f64>,
    url:             Option<String>,
  }

  let dir = export_dir();
  write(dir.path(), TableName::Docs, &[
    FloatKeyDoc {
      doc_id:          10,
      ano:             Some(2020),
      titulo:          None,
      orientador_nome: Some("Ana Souza".into()),
      orientador_id:   Some(1.0),
      url:             None,
    },
    FloatKeyDoc {
      doc_id:          11,
      ano:             Some(2021),
      titulo:          None,
      orientador_nome: None,
      orientador_id:   None,
      url:             None,
    },
  ]);
  let store = ParquetStore::new(dir.path());
  let ds = Dataset::load(&store).unwrap();

  assert_eq!(ds.documents[0].advisor_id.as_deref(), Some("1"));
  assert_eq!(ds.documents[1].advisor_id, None);

  let view = query::profile_page(&ds, Some("Ana Souza")).selected.unwrap();
  assert_eq!(view.profile.advisor_id, "1");
  let theses: Vec<&str> = view.theses.iter().map(|r| r.doc_id.as_str()).collect();
  assert_eq!(theses, vec!["10"]);
}

#[test]
fn unnamed_advisor_profile_loads() {
  let dir = export_dir();
  write(dir.path(), TableName::AdvisorProfiles, &[AdvisorProfile {
    advisor_id:   "7".into(),
    advisor_name: None,
    thesis_count: 1,
    years_active: 1,
    top_topics:   None,
  }]);
  let store = ParquetStore::new(dir.path());

  let profiles = store.advisor_profiles().unwrap();
  assert_eq!(profiles[0].advisor_name, None);
  let ds = Dataset::load(&store).unwrap();
  assert!(query::advisor_options(&ds).is_empty());
}

#[test]
fn current_topics_preferred_when_present() {
  let dir = export_dir();
  let store = ParquetStore::new(dir.path());
  assert_eq!(store.resolve_topics_table().unwrap().0, TableName::Topics);
  assert_eq!(store.topics().unwrap().len(), 3);

  write(dir.path(), TableName::TopicsCurrent, &[topic(0, "Redes v2")]);
  let store = ParquetStore::new(dir.path());
  assert_eq!(store.resolve_topics_table().unwrap().0, TableName::TopicsCurrent);
  let topics = store.topics().unwrap();
  assert_eq!(topics, vec![topic(0, "Redes v2")]);
}

// ─── Manifest ────────────────────────────────────────────────────────────────

#[test]
fn absent_manifest_is_empty() {
  let dir = export_dir();
  let store = ParquetStore::new(dir.path());
  assert!(store.load_manifest().is_empty());
}

#[test]
fn garbage_manifest_is_empty() {
  let dir = export_dir();
  std::fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
  let store = ParquetStore::new(dir.path());
  assert!(store.manifest().is_empty());
}

#[test]
fn manifest_is_read_once() {
  let dir = export_dir();
  let path = dir.path().join(MANIFEST_FILE);
  std::fs::write(&path, r#"{"generated_at": "2025-02-01", "selection": {"K": 30}}"#).unwrap();
  let store = ParquetStore::new(dir.path());

  let first = store.load_manifest();
  assert_eq!(first.generated_at().as_deref(), Some("2025-02-01"));
  assert_eq!(first.k(), Some(30));

  std::fs::remove_file(&path).unwrap();
  assert_eq!(store.load_manifest(), first);
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[test]
fn dataset_loads_and_joins() {
  let dir = export_dir();
  let store = ParquetStore::new(dir.path());
  let ds = Dataset::load(&store).unwrap();

  // Assignment for unknown document 99 is dropped by the inner join.
  assert_eq!(ds.doc_with_topic.len(), 3);
  assert_eq!(ds.doc_with_topic[0].label.as_deref(), Some("Redes"));

  let o = query::overview(&ds);
  assert_eq!(o.total_docs, 3);
  assert_eq!(o.period_display(), "2020–2022");
  assert_eq!(o.topic_count, 2);
  assert_eq!(o.outlier_count, 1);
  assert_eq!(o.top_topics[0].total_docs, 10);

  let page = query::profile_page(&ds, Some("Ana Souza"));
  let view = page.selected.unwrap();
  assert_eq!(view.theses.len(), 2);
  assert_eq!(view.distribution[0].label, Some("Redes"));

  // Everything came through one read per table.
  assert_eq!(store.reads(), 6);
}
