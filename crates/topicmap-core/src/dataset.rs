//! The session dataset: every loaded table plus the joined view.

use tracing::info;

use crate::{
  Error, Result,
  advisor::{AdvisorProfile, AdvisorTopic},
  document::{Document, DocumentTopic},
  join::{DocumentWithTopic, build_document_with_topic},
  manifest::Manifest,
  store::DatasetSource,
  topic::{Topic, TopicTrend},
};

/// Immutable snapshot of the exports, loaded once per session.
///
/// The joined [`DocumentWithTopic`] view is computed here and shared by every
/// page; queries only read from it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
  pub documents:        Vec<Document>,
  /// Sorted by topic id.
  pub topics:           Vec<Topic>,
  pub doc_topics:       Vec<DocumentTopic>,
  pub trends:           Vec<TopicTrend>,
  pub advisor_profiles: Vec<AdvisorProfile>,
  pub advisor_topics:   Vec<AdvisorTopic>,
  pub doc_with_topic:   Vec<DocumentWithTopic>,
  pub manifest:         Manifest,
}

impl Dataset {
  /// Load every table from `source` and build the joined view.
  pub fn load<S: DatasetSource>(source: &S) -> Result<Self> {
    let wrap = |e: S::Error| Error::Source(Box::new(e));

    let documents = source.documents().map_err(wrap)?;
    let topics = source.topics().map_err(wrap)?;
    let doc_topics = source.doc_topics().map_err(wrap)?;
    let trends = source.topic_trends().map_err(wrap)?;
    let advisor_profiles = source.advisor_profiles().map_err(wrap)?;
    let advisor_topics = source.advisor_topics().map_err(wrap)?;
    let manifest = source.manifest();

    let dataset = Self::from_parts(
      documents,
      topics,
      doc_topics,
      trends,
      advisor_profiles,
      advisor_topics,
      manifest,
    );
    info!(
      documents = dataset.documents.len(),
      topics = dataset.topics.len(),
      assignments = dataset.doc_with_topic.len(),
      advisors = dataset.advisor_profiles.len(),
      "dataset loaded"
    );
    Ok(dataset)
  }

  /// Assemble a dataset from already-decoded tables.
  pub fn from_parts(
    documents: Vec<Document>,
    mut topics: Vec<Topic>,
    doc_topics: Vec<DocumentTopic>,
    trends: Vec<TopicTrend>,
    advisor_profiles: Vec<AdvisorProfile>,
    advisor_topics: Vec<AdvisorTopic>,
    manifest: Manifest,
  ) -> Self {
    topics.sort_by_key(|t| t.topic);
    let doc_with_topic = build_document_with_topic(&documents, &doc_topics, &topics);
    Self {
      documents,
      topics,
      doc_topics,
      trends,
      advisor_profiles,
      advisor_topics,
      doc_with_topic,
      manifest,
    }
  }

  /// The topics table row for `topic`.
  pub fn topic(&self, topic: i64) -> Option<&Topic> {
    self
      .topics
      .binary_search_by_key(&topic, |t| t.topic)
      .ok()
      .map(|i| &self.topics[i])
  }

  /// Label of `topic`, if the topics table knows it.
  pub fn label_of(&self, topic: i64) -> Option<&str> {
    self.topic(topic).and_then(|t| t.label.as_deref())
  }

  /// `[id] label` strings for every topic, in id order.
  pub fn topic_options(&self) -> Vec<String> {
    self.topics.iter().map(Topic::display).collect()
  }
}
